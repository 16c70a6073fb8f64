use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("No {section} block found in the report")]
    EmptyInput { section: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("Atom row needs a label and three coordinates, found {found} field(s)")]
    TooFewFields { found: usize },
    #[error("Invalid float for {field} coordinate (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Invalid frequency value '{value}'")]
    InvalidFrequency { value: String },
}
