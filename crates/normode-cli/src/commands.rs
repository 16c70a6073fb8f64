pub mod animate;
pub mod modes;

use crate::error::{CliError, Result};
use normode::core::io::error::ReportError;
use std::path::Path;

/// Reads a whole report, attaching the path to any I/O failure.
fn read_report(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::Report {
        path: path.to_path_buf(),
        source: ReportError::Io(e),
    })
}
