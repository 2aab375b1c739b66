//! Module for additional helper functionality
pub mod test_helper;
pub mod uom_macros;
