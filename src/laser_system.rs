#![warn(missing_docs)]
//! The complete fiber laser consisting of a pump and a resonator.
use crate::{
    nodes::{Cavity, PumpSource},
    reporting::LaserReport,
};
use log::{info, warn};
use std::fmt::Display;
use uom::si::power::watt;

/// A fiber laser system composed of a [`PumpSource`] and a [`Cavity`].
///
/// The system owns both components and holds no further state. Each call of
/// [`LaserSystem::operate`] is a complete, independent evaluation of the model.
///
/// ## Example
///
/// ```rust
/// use fiber_laser::{
///     meter,
///     nodes::{ActiveFiber, Cavity, PumpSource},
///     watt, LaserSystem,
/// };
///
/// let fiber = ActiveFiber::new(meter!(10.0), 0.1, 0.05, 1.0);
/// let cavity = Cavity::new(fiber, 0.99, 0.95);
/// let system = LaserSystem::new(PumpSource::new(watt!(2.0)), cavity);
/// assert!(system.operate().is_lasing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserSystem {
    pump: PumpSource,
    cavity: Cavity,
}
impl LaserSystem {
    /// Creates a new [`LaserSystem`].
    #[must_use]
    pub const fn new(pump: PumpSource, cavity: Cavity) -> Self {
        Self { pump, cavity }
    }
    /// Returns a reference to the [`PumpSource`] of this [`LaserSystem`].
    #[must_use]
    pub const fn pump(&self) -> &PumpSource {
        &self.pump
    }
    /// Returns a reference to the [`Cavity`] of this [`LaserSystem`].
    #[must_use]
    pub const fn cavity(&self) -> &Cavity {
        &self.cavity
    }
    /// Run the laser once with the power of its pump source.
    ///
    /// Returns [`LaserReport::Lasing`] with the output power if the threshold gain is reached,
    /// [`LaserReport::BelowThreshold`] otherwise. A non-finite output power (overflowing gain)
    /// is reported as a warning but passed on unchanged.
    #[must_use]
    pub fn operate(&self) -> LaserReport {
        let pump_power = self.pump.power();
        info!("Operate laser with {} W pump power", pump_power.get::<watt>());
        if !self.cavity.is_lasing(pump_power) {
            info!("Threshold gain not reached");
            return LaserReport::BelowThreshold;
        }
        let output_power = self.cavity.output_power(pump_power);
        if !output_power.get::<watt>().is_finite() {
            warn!(
                "Output power is not finite ({} W). The gain model has no saturation.",
                output_power.get::<watt>()
            );
        }
        LaserReport::Lasing { output_power }
    }
}
impl Display for LaserSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fiber laser: {} pumping {}", self.pump, self.cavity)
    }
}
