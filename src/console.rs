//! Handling the command line interface
//!
//! This module handles the command line parsing. All arguments are optional. Without any
//! argument the reference setup is evaluated and the result is printed in english.
use crate::{
    error::{FiberLaserError, FlResult},
    reporting::Language,
};
use clap::Parser;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use strum::IntoEnumIterator;

/// Command line arguments of the fiber laser application.
#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    /// file path of a laser setup. If `None`, the reference setup is used.
    pub setup_path: Option<PathBuf>,
    /// language of the printed result
    pub language: Language,
    /// file path of the JSON analysis report. If `None`, no report is written.
    pub report_path: Option<PathBuf>,
    /// run the plausibility check of the setup before operating the laser
    pub check: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct PartialArgs {
    /// file path of a YAML laser setup. If not given, the reference setup is used
    #[arg(short, long)]
    setup: Option<String>,

    /// language of the printed result (en, ru)
    #[arg(short, long)]
    language: Option<String>,

    /// file path of a JSON analysis report to be written
    #[arg(short, long)]
    report: Option<String>,

    /// check the setup for non-physical parameters and print warnings
    #[arg(long)]
    check: bool,
}

/// Checks if the passed setup file path is valid.
/// # Attributes
/// * `path`: Path to the file
/// # Returns
/// Returns True if the path exists and is a file, false otherwise
fn file_path_is_valid(path: &Path) -> bool {
    Path::exists(path) && Path::is_file(path)
}

fn eval_setup_input(file_path: &str) -> FlResult<PathBuf> {
    let path = Path::new(file_path);
    if file_path_is_valid(path) {
        Ok(path.to_path_buf())
    } else {
        Err(FiberLaserError::Console(format!(
            "setup file {file_path} not found"
        )))
    }
}

/// Evaluates if the passed language string is valid.
/// # Attributes
/// * `language_input`: language code (e.g. `en`) or name (e.g. `russian`)
/// # Errors
/// Returns an error listing the available language codes if the input is unknown
fn eval_language_input(language_input: &str) -> FlResult<Language> {
    Language::from_str(language_input).map_err(|_| {
        let codes: Vec<&str> = Language::iter().map(Language::code).collect();
        FiberLaserError::Console(format!(
            "unknown language '{language_input}'. Available: {}",
            codes.join(", ")
        ))
    })
}

/// Evaluates if the passed report file path can be created.
///
/// The file itself may or may not exist but its parent directory must exist.
fn eval_report_input(report_path: &str) -> FlResult<PathBuf> {
    let path = PathBuf::from(report_path);
    if path.as_os_str().is_empty() || path.is_dir() {
        return Err(FiberLaserError::Console(format!(
            "report path '{report_path}' is not a file path"
        )));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            Err(FiberLaserError::Console(format!(
                "report directory {} does not exist",
                parent.display()
            )))
        }
        _ => Ok(path),
    }
}

impl TryFrom<PartialArgs> for Args {
    type Error = FiberLaserError;

    fn try_from(part_args: PartialArgs) -> FlResult<Self> {
        let setup_path = part_args
            .setup
            .as_deref()
            .map(eval_setup_input)
            .transpose()?;
        let language = part_args
            .language
            .as_deref()
            .map(eval_language_input)
            .transpose()?
            .unwrap_or_default();
        let report_path = part_args
            .report
            .as_deref()
            .map(eval_report_input)
            .transpose()?;
        Ok(Self {
            setup_path,
            language,
            report_path,
            check: part_args.check,
        })
    }
}
