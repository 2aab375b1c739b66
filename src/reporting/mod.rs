//! Module for reporting the outcome of a laser evaluation
pub mod analysis_report;
mod language;
mod laser_report;

pub use analysis_report::AnalysisReport;
pub use language::Language;
pub use laser_report::LaserReport;
