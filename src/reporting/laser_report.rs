#![warn(missing_docs)]
//! Outcome of a single evaluation of a [`LaserSystem`](crate::LaserSystem).
use super::Language;
use serde::Serialize;
use std::fmt::Display;
use uom::si::f64::Power;

/// Result of [`LaserSystem::operate`](crate::LaserSystem::operate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LaserReport {
    /// The threshold gain is reached and the laser emits the given output power.
    Lasing {
        /// output power behind the output coupler. Might be infinite for an overflowing gain.
        output_power: Power,
    },
    /// The threshold gain is not reached. There is no output.
    BelowThreshold,
}
impl LaserReport {
    /// Returns `true` if this report describes a lasing system.
    #[must_use]
    pub const fn is_lasing(&self) -> bool {
        matches!(self, Self::Lasing { .. })
    }
    /// Returns the output power if the system is lasing.
    #[must_use]
    pub const fn output_power(&self) -> Option<Power> {
        match self {
            Self::Lasing { output_power } => Some(*output_power),
            Self::BelowThreshold => None,
        }
    }
    /// Returns the human-readable one line message of this report in the given [`Language`].
    #[must_use]
    pub fn message(&self, language: Language) -> String {
        match self {
            Self::Lasing { output_power } => language.lasing_message(*output_power),
            Self::BelowThreshold => language.below_threshold_message().to_owned(),
        }
    }
}
impl Display for LaserReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message(Language::default()))
    }
}
