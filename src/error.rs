#![warn(missing_docs)]
//! Error structures of the fiber laser model
use std::{error::Error, fmt::Display};

/// Application specific Result type
pub type FlResult<T> = std::result::Result<T, FiberLaserError>;

/// Errors that can be returned by the I/O layer around the laser model.
///
/// The model itself (gain, threshold, output power) never fails. Non-physical parameters
/// simply produce infinite, negative or `NaN` values.
#[derive(Debug, PartialEq, Eq)]
pub enum FiberLaserError {
    /// errors while reading, parsing or writing a [`LaserSetup`](crate::setup::LaserSetup)
    Setup(String),
    /// errors while creating or writing an analysis report
    Report(String),
    /// errors in connection with command line arguments
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for FiberLaserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup(m) => {
                write!(f, "Setup:{m}")
            }
            Self::Report(m) => {
                write!(f, "Report:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Fiber Laser Error:Other:{m}"),
        }
    }
}
impl Error for FiberLaserError {}

impl std::convert::From<String> for FiberLaserError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = FiberLaserError::from("test".to_string());
        assert_eq!(error, FiberLaserError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", FiberLaserError::Setup("test".to_string())),
            "Setup:test"
        );
        assert_eq!(
            format!("{}", FiberLaserError::Report("test".to_string())),
            "Report:test"
        );
        assert_eq!(
            format!("{}", FiberLaserError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", FiberLaserError::Other("test".to_string())),
            "Fiber Laser Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", FiberLaserError::Setup("test".to_string())),
            "Setup(\"test\")"
        );
    }
}
