#![warn(missing_docs)]
use std::fmt::Display;
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

/// A rare-earth doped fiber acting as gain medium of the laser.
///
/// The gain is modeled as plain exponential growth
///
/// `gain = exp(emission_coeff * doping_concentration * length * pump_power)`
///
/// with the length in meters and the pump power in watts. There is no saturation term. For
/// realistic doping concentrations (~1e25 ions/m³) the exponent is huge and the gain overflows
/// to `f64::INFINITY`. This value is returned as is and not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveFiber {
    length: Length,
    absorption_coeff: f64,
    emission_coeff: f64,
    doping_concentration: f64,
}
impl ActiveFiber {
    /// Creates a new [`ActiveFiber`].
    ///
    /// # Attributes
    /// * `length`: physical length of the fiber
    /// * `absorption_coeff`: absorption coefficient in 1/m (stored, not used by the gain model)
    /// * `emission_coeff`: emission coefficient in 1/m
    /// * `doping_concentration`: concentration of active ions per m³
    #[must_use]
    pub const fn new(
        length: Length,
        absorption_coeff: f64,
        emission_coeff: f64,
        doping_concentration: f64,
    ) -> Self {
        Self {
            length,
            absorption_coeff,
            emission_coeff,
            doping_concentration,
        }
    }
    /// Returns the length of this [`ActiveFiber`].
    #[must_use]
    pub const fn length(&self) -> Length {
        self.length
    }
    /// Returns the absorption coefficient (1/m) of this [`ActiveFiber`].
    #[must_use]
    pub const fn absorption_coeff(&self) -> f64 {
        self.absorption_coeff
    }
    /// Returns the emission coefficient (1/m) of this [`ActiveFiber`].
    #[must_use]
    pub const fn emission_coeff(&self) -> f64 {
        self.emission_coeff
    }
    /// Returns the doping concentration (ions/m³) of this [`ActiveFiber`].
    #[must_use]
    pub const fn doping_concentration(&self) -> f64 {
        self.doping_concentration
    }
    /// Returns the exponent of the gain function for the given pump power.
    #[must_use]
    pub fn gain_exponent(&self, pump_power: Power) -> f64 {
        self.emission_coeff
            * self.doping_concentration
            * self.length.get::<meter>()
            * pump_power.get::<watt>()
    }
    /// Calculate the (single pass) gain of this [`ActiveFiber`] for the given pump power.
    ///
    /// The result may be `f64::INFINITY` if the exponent exceeds the range of `f64::exp`.
    #[must_use]
    pub fn calculate_gain(&self, pump_power: Power) -> f64 {
        self.gain_exponent(pump_power).exp()
    }
}
impl Display for ActiveFiber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "active fiber (length: {} m, absorption: {} 1/m, emission: {} 1/m, doping: {:e})",
            self.length.get::<meter>(),
            self.absorption_coeff,
            self.emission_coeff,
            self.doping_concentration
        )
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::{meter, watt};
    use approx::assert_relative_eq;

    fn unity_doped_fiber() -> ActiveFiber {
        // exponent = 0.05 * 1.0 * 10.0 * P = 0.5 * P
        ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1.0)
    }
    #[test]
    fn new() {
        let fiber = ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1e25);
        assert_relative_eq!(fiber.length().get::<meter>(), 10.0);
        assert_eq!(fiber.absorption_coeff(), 0.1);
        assert_eq!(fiber.emission_coeff(), 0.05);
        assert_eq!(fiber.doping_concentration(), 1e25);
    }
    #[test]
    fn calculate_gain() {
        let fiber = unity_doped_fiber();
        assert_relative_eq!(fiber.gain_exponent(watt!(2.0)), 1.0);
        assert_relative_eq!(fiber.calculate_gain(watt!(2.0)), std::f64::consts::E);
        assert_eq!(fiber.calculate_gain(watt!(0.0)), 1.0);
    }
    #[test]
    fn calculate_gain_monotonic() {
        let fiber = unity_doped_fiber();
        let mut last_gain = fiber.calculate_gain(watt!(0.01));
        for i in 2..200 {
            let gain = fiber.calculate_gain(watt!(0.01 * f64::from(i)));
            assert!(gain > last_gain);
            last_gain = gain;
        }
    }
    #[test]
    fn calculate_gain_ignores_absorption() {
        let fiber1 = ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1.0);
        let fiber2 = ActiveFiber::new(meter!(10.0), 5.0, 0.05, 1.0);
        assert_eq!(
            fiber1.calculate_gain(watt!(1.0)),
            fiber2.calculate_gain(watt!(1.0))
        );
    }
    #[test]
    fn calculate_gain_overflow() {
        let fiber = ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1e25);
        let gain = fiber.calculate_gain(watt!(5.0));
        assert!(gain.is_infinite());
        assert!(gain.is_sign_positive());
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1e25)),
            "active fiber (length: 10 m, absorption: 0.1 1/m, emission: 0.05 1/m, doping: 1e25)"
        );
    }
}
