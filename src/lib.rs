//! This is the documentation for the **fiber_laser** package.
//!
//! It contains a minimal, closed-form model of a linear fiber laser:
//!
//! pump power → fiber gain → threshold comparison → output power
//!
//! The components are a [`PumpSource`](nodes::PumpSource), an [`ActiveFiber`](nodes::ActiveFiber)
//! acting as gain medium and a two mirror [`Cavity`](nodes::Cavity). A [`LaserSystem`] combines pump
//! and cavity and evaluates the model once per call of [`LaserSystem::operate`].
//!
//! The model does not validate its parameters and does not guard its arithmetic. Infinite gains or
//! thresholds are regular results. [`LaserSetup::check`](setup::LaserSetup::check) can be used to
//! detect such parameter sets in advance.
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod error;
mod laser_system;
pub mod nodes;
pub mod reporting;
pub mod setup;
pub mod utils;

pub use laser_system::LaserSystem;
pub use setup::LaserSetup;

/// Return the version information of the currently built executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
