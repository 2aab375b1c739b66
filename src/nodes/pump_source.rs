#![warn(missing_docs)]
use std::fmt::Display;
use uom::si::{f64::Power, power::watt};

/// A pump source delivering a constant optical power into the active fiber.
///
/// The power is fixed at construction. No check is made on its sign or magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpSource {
    power: Power,
}
impl PumpSource {
    /// Creates a new [`PumpSource`] with the given pump power.
    #[must_use]
    pub const fn new(power: Power) -> Self {
        Self { power }
    }
    /// Returns the pump power of this [`PumpSource`].
    #[must_use]
    pub const fn power(&self) -> Power {
        self.power
    }
}
impl Display for PumpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pump source ({} W)", self.power.get::<watt>())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{milliwatt, watt};
    use approx::assert_relative_eq;
    #[test]
    fn new() {
        let pump = PumpSource::new(watt!(5.0));
        assert_relative_eq!(pump.power().get::<watt>(), 5.0);
    }
    #[test]
    fn power_unchanged() {
        let pump = PumpSource::new(milliwatt!(1.5));
        assert_eq!(pump.power(), milliwatt!(1.5));
        let pump = PumpSource::new(watt!(-2.0));
        assert_relative_eq!(pump.power().get::<watt>(), -2.0);
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", PumpSource::new(watt!(2.5))),
            "pump source (2.5 W)"
        );
    }
}
