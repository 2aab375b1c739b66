#![warn(missing_docs)]
//! This module contains the components of the laser model (pump, fiber, resonator)
mod active_fiber;
mod cavity;
mod pump_source;

pub use active_fiber::ActiveFiber;
pub use cavity::Cavity;
pub use pump_source::PumpSource;
