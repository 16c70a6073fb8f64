use thiserror::Error;

use super::config::ConfigError;
use super::connectivity::ConnectivityError;
use crate::core::io::error::ReportError;
use crate::core::models::mode::AlignmentError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Report parsing failed: {source}")]
    Report {
        #[from]
        source: ReportError,
    },

    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Mode index {index} is out of range; the report has {count} mode(s)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Selected mode does not match the geometry: {0}")]
    ModeMismatch(#[from] AlignmentError),
}
