#![warn(missing_docs)]
//! Module handling the machine readable (JSON) analysis report.
use super::LaserReport;
use crate::{
    error::{FiberLaserError, FlResult},
    get_version,
    setup::LaserSetup,
    LaserSystem,
};
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;
use std::{fs::File, io::Write, path::Path};

#[derive(Serialize, Debug, Clone)]
/// Structure for storing the setup and all intermediate values of one laser evaluation.
///
/// Non-finite values (e.g. an overflowing gain) are written as `null` by the JSON serializer.
pub struct AnalysisReport {
    fiber_laser_version: String,
    analysis_timestamp: DateTime<Local>,
    setup: LaserSetup,
    losses: f64,
    threshold_gain: f64,
    gain: f64,
    result: LaserReport,
}
impl AnalysisReport {
    /// Creates a new [`AnalysisReport`] for the given setup, the system built from it and the
    /// [`LaserReport`] returned by [`LaserSystem::operate`].
    #[must_use]
    pub fn new(setup: &LaserSetup, system: &LaserSystem, result: LaserReport) -> Self {
        let cavity = system.cavity();
        Self {
            fiber_laser_version: get_version(),
            analysis_timestamp: Local::now(),
            setup: setup.clone(),
            losses: cavity.losses(),
            threshold_gain: cavity.calculate_threshold(),
            gain: cavity.fiber().calculate_gain(system.pump().power()),
            result,
        }
    }
    /// Returns the combined mirror loss.
    #[must_use]
    pub const fn losses(&self) -> f64 {
        self.losses
    }
    /// Returns the threshold gain of the cavity.
    #[must_use]
    pub const fn threshold_gain(&self) -> f64 {
        self.threshold_gain
    }
    /// Returns the fiber gain at the pump power of the setup.
    #[must_use]
    pub const fn gain(&self) -> f64 {
        self.gain
    }
    /// Returns the [`LaserReport`] of this [`AnalysisReport`].
    #[must_use]
    pub const fn result(&self) -> &LaserReport {
        &self.result
    }
    /// Serialize this [`AnalysisReport`] into a pretty printed JSON string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_json(&self) -> FlResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FiberLaserError::Report(format!("serialization of report failed: {e}")))
    }
    /// Write this [`AnalysisReport`] as JSON file to the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization failed.
    ///   - the file cannot be created or written.
    pub fn save_to_file(&self, path: &Path) -> FlResult<()> {
        let serialized = self.to_json()?;
        info!("Write analysis report to {}", path.display());
        let mut output = File::create(path).map_err(|e| {
            FiberLaserError::Report(format!(
                "report file creation failed: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}")
            .map_err(|e| FiberLaserError::Report(format!("writing report file failed: {e}")))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::setup::FiberSetup;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn plausible_setup() -> LaserSetup {
        LaserSetup {
            fiber: FiberSetup {
                doping_concentration: 1.0,
                ..FiberSetup::default()
            },
            ..LaserSetup::default()
        }
    }
    #[test]
    fn new() {
        let setup = plausible_setup();
        let system = setup.build();
        let report = AnalysisReport::new(&setup, &system, system.operate());
        assert_eq!(report.fiber_laser_version, get_version());
        assert_eq!(report.setup, setup);
        assert_relative_eq!(report.losses(), 0.06, epsilon = 1e-12);
        assert_relative_eq!(report.threshold_gain(), 1.0 / 0.94, epsilon = 1e-12);
        assert_relative_eq!(report.gain(), 2.5_f64.exp());
        assert!(report.result().is_lasing());
    }
    #[test]
    fn to_json() {
        let setup = plausible_setup();
        let system = setup.build();
        let report = AnalysisReport::new(&setup, &system, system.operate());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["setup"]["pump_power"], 5.0);
        assert_eq!(json["setup"]["fiber"]["doping_concentration"], 1.0);
        assert_eq!(json["result"]["state"], "lasing");
        assert!(json["result"]["output_power"].is_f64());
        assert!(json["analysis_timestamp"].is_string());
    }
    #[test]
    fn to_json_overflow() {
        let setup = LaserSetup::default();
        let system = setup.build();
        let report = AnalysisReport::new(&setup, &system, system.operate());
        assert!(report.gain().is_infinite());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert!(json["gain"].is_null());
        assert!(json["result"]["output_power"].is_null());
        assert!(json["threshold_gain"].is_f64());
    }
    #[test]
    fn save_to_file() {
        let setup = plausible_setup();
        let system = setup.build();
        let report = AnalysisReport::new(&setup, &system, system.operate());
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        report.save_to_file(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, report.to_json().unwrap());
    }
    #[test]
    fn save_to_file_invalid_path() {
        let setup = plausible_setup();
        let system = setup.build();
        let report = AnalysisReport::new(&setup, &system, system.operate());
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_existing").join("report.json");
        assert_matches!(report.save_to_file(&path), Err(FiberLaserError::Report(_)));
    }
}
