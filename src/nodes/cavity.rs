#![warn(missing_docs)]
use super::ActiveFiber;
use crate::watt;
use log::debug;
use std::fmt::Display;
use uom::si::f64::Power;

/// A linear fiber laser resonator formed by an [`ActiveFiber`] between two mirrors.
///
/// Mirror 1 is the high reflector, mirror 2 the output coupler. The reflectivities are plain
/// fractions and are not checked against the range [0, 1].
///
/// ## Threshold model
///
/// The combined loss is `(1 - r1) + (1 - r2)` and the threshold gain is `1 / (1 - losses)`.
/// For `losses == 1` the threshold is infinite, for `losses > 1` it becomes negative. Both
/// values are passed on unchanged to the lasing decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cavity {
    fiber: ActiveFiber,
    mirror1_reflectivity: f64,
    mirror2_reflectivity: f64,
}
impl Cavity {
    /// Creates a new [`Cavity`] which takes ownership of the given [`ActiveFiber`].
    #[must_use]
    pub const fn new(
        fiber: ActiveFiber,
        mirror1_reflectivity: f64,
        mirror2_reflectivity: f64,
    ) -> Self {
        Self {
            fiber,
            mirror1_reflectivity,
            mirror2_reflectivity,
        }
    }
    /// Returns a reference to the [`ActiveFiber`] of this [`Cavity`].
    #[must_use]
    pub const fn fiber(&self) -> &ActiveFiber {
        &self.fiber
    }
    /// Returns the reflectivity of the first (high reflecting) mirror.
    #[must_use]
    pub const fn mirror1_reflectivity(&self) -> f64 {
        self.mirror1_reflectivity
    }
    /// Returns the reflectivity of the second (output coupling) mirror.
    #[must_use]
    pub const fn mirror2_reflectivity(&self) -> f64 {
        self.mirror2_reflectivity
    }
    /// Returns the combined fractional loss of both mirrors.
    #[must_use]
    pub fn losses(&self) -> f64 {
        (1.0 - self.mirror1_reflectivity) + (1.0 - self.mirror2_reflectivity)
    }
    /// Calculate the threshold gain of this [`Cavity`].
    ///
    /// The threshold only depends on the mirror reflectivities.
    #[must_use]
    pub fn calculate_threshold(&self) -> f64 {
        1.0 / (1.0 - self.losses())
    }
    /// Returns `true` if the fiber gain for the given pump power reaches the threshold gain.
    ///
    /// Equality counts as lasing. A `NaN` on either side results in `false`.
    #[must_use]
    pub fn is_lasing(&self, pump_power: Power) -> bool {
        let gain = self.fiber.calculate_gain(pump_power);
        let threshold = self.calculate_threshold();
        debug!("gain: {gain}, threshold gain: {threshold}");
        gain >= threshold
    }
    /// Calculate the output power through the second mirror for the given pump power.
    ///
    /// Below threshold the output power is exactly zero. Above threshold it is
    /// `pump_power * (gain - 1) * (1 - r2)`. The gain is evaluated again here and not taken over
    /// from a previous call of [`Cavity::is_lasing`].
    #[must_use]
    pub fn output_power(&self, pump_power: Power) -> Power {
        if !self.is_lasing(pump_power) {
            return watt!(0.0);
        }
        let gain = self.fiber.calculate_gain(pump_power);
        pump_power * ((gain - 1.0) * (1.0 - self.mirror2_reflectivity))
    }
}
impl Display for Cavity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cavity (R1: {}, R2: {}) with {}",
            self.mirror1_reflectivity, self.mirror2_reflectivity, self.fiber
        )
    }
}
