#![warn(missing_docs)]
//! Description of a complete fiber laser setup.
//!
//! A [`LaserSetup`] holds all construction parameters of a [`LaserSystem`] as plain data. Its
//! [`Default`] holds the reference configuration (5 W pump, 10 m fiber, 99 % / 95 % mirrors).
//!
//! This module also handles reading and writing of setup files (YAML). All values are given in
//! SI base units:
//! ```yaml
//! pump_power: 5.0
//! fiber:
//!   length: 10.0
//!   absorption_coeff: 0.1
//!   emission_coeff: 0.05
//!   doping_concentration: 1.0e+25
//! mirror1_reflectivity: 0.99
//! mirror2_reflectivity: 0.95
//! ```
//! Missing entries are replaced by the reference values.
use crate::{
    error::{FiberLaserError, FlResult},
    meter,
    nodes::{ActiveFiber, Cavity, PumpSource},
    watt, LaserSystem,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

/// Parameters of the [`ActiveFiber`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiberSetup {
    /// fiber length
    pub length: Length,
    /// absorption coefficient (1/m)
    pub absorption_coeff: f64,
    /// emission coefficient (1/m)
    pub emission_coeff: f64,
    /// concentration of active ions (1/m³)
    pub doping_concentration: f64,
}
impl Default for FiberSetup {
    fn default() -> Self {
        Self {
            length: meter!(10.0),
            absorption_coeff: 0.1,
            emission_coeff: 0.05,
            doping_concentration: 1e25,
        }
    }
}
impl From<&FiberSetup> for ActiveFiber {
    fn from(setup: &FiberSetup) -> Self {
        Self::new(
            setup.length,
            setup.absorption_coeff,
            setup.emission_coeff,
            setup.doping_concentration,
        )
    }
}

/// All parameters needed to build a [`LaserSystem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserSetup {
    /// pump power
    pub pump_power: Power,
    /// parameters of the active fiber
    pub fiber: FiberSetup,
    /// reflectivity of the high reflecting mirror
    pub mirror1_reflectivity: f64,
    /// reflectivity of the output coupler
    pub mirror2_reflectivity: f64,
}
impl Default for LaserSetup {
    fn default() -> Self {
        Self {
            pump_power: watt!(5.0),
            fiber: FiberSetup::default(),
            mirror1_reflectivity: 0.99,
            mirror2_reflectivity: 0.95,
        }
    }
}
impl LaserSetup {
    /// Create a new [`LaserSetup`] from a setup file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> FlResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            FiberLaserError::Setup(format!("cannot read file {} : {}", path.display(), e))
        })?;
        info!("Read laser setup from {}", path.display());
        Self::from_string(&contents)
    }
    /// Create a new [`LaserSetup`] from the given YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the parsing of the string failed.
    pub fn from_string(setup_string: &str) -> FlResult<Self> {
        serde_yaml::from_str(setup_string)
            .map_err(|e| FiberLaserError::Setup(format!("parsing of setup failed: {e}")))
    }
    /// Serialize this [`LaserSetup`] into a YAML string.
    ///
    /// # Errors
    ///
    /// This function will return an error if the serialization failed.
    pub fn to_yaml(&self) -> FlResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| FiberLaserError::Setup(format!("serialization of setup failed: {e}")))
    }
    /// Save this [`LaserSetup`] to a YAML file with the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the serialization of the setup failed.
    ///   - the file path cannot be created.
    ///   - it cannot write into the file (e.g. no space).
    pub fn save_to_file(&self, path: &Path) -> FlResult<()> {
        let serialized = self.to_yaml()?;
        let mut output = File::create(path).map_err(|e| {
            FiberLaserError::Setup(format!(
                "could not create file path: {}: {}",
                path.display(),
                e
            ))
        })?;
        write!(output, "{serialized}").map_err(|e| {
            FiberLaserError::Setup(format!(
                "writing to file path {} failed: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
    /// Build the [`LaserSystem`] described by this [`LaserSetup`].
    ///
    /// The parameters are taken over as they are. Use [`LaserSetup::check`] for detecting
    /// non-physical values.
    #[must_use]
    pub fn build(&self) -> LaserSystem {
        let pump = PumpSource::new(self.pump_power);
        let cavity = Cavity::new(
            ActiveFiber::from(&self.fiber),
            self.mirror1_reflectivity,
            self.mirror2_reflectivity,
        );
        LaserSystem::new(pump, cavity)
    }
    /// Check this [`LaserSetup`] for non-physical or numerically problematic parameters.
    ///
    /// Each finding is emitted as a warning and returned. The setup is never rejected or modified
    /// and [`LaserSetup::build`] still accepts it.
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let pump_power = self.pump_power.get::<watt>();
        if pump_power <= 0.0 || pump_power.is_nan() {
            warnings.push(format!("pump power {pump_power} W is not positive"));
        }
        let length = self.fiber.length.get::<meter>();
        if length <= 0.0 || length.is_nan() {
            warnings.push(format!("fiber length {length} m is not positive"));
        }
        for (name, value) in [
            ("absorption coefficient", self.fiber.absorption_coeff),
            ("emission coefficient", self.fiber.emission_coeff),
            ("doping concentration", self.fiber.doping_concentration),
        ] {
            if value < 0.0 {
                warnings.push(format!("{name} {value} is negative"));
            }
        }
        for (nr, reflectivity) in [
            (1, self.mirror1_reflectivity),
            (2, self.mirror2_reflectivity),
        ] {
            if !(0.0..=1.0).contains(&reflectivity) {
                warnings.push(format!(
                    "mirror {nr} reflectivity {reflectivity} is outside [0, 1]"
                ));
            }
        }
        let system = self.build();
        let losses = system.cavity().losses();
        if losses >= 1.0 {
            warnings.push(format!(
                "combined mirror loss {losses:.3} is not below 1. Threshold gain is infinite or negative"
            ));
        }
        let exponent = system.cavity().fiber().gain_exponent(self.pump_power);
        if exponent > f64::MAX.ln() {
            warnings.push(format!(
                "gain exponent {exponent:.3e} exceeds {:.2}. Gain overflows to infinity",
                f64::MAX.ln()
            ));
        }
        for warning in &warnings {
            warn!("{warning}");
        }
        warnings
    }
}
