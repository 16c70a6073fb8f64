use super::error::{ParseErrorKind, ReportError};
use super::rows::{is_blank, is_separator, parse_atom_row};
use super::traits::ReportSection;
use crate::core::models::mode::{Displacement, ModeTable, VibrationalMode};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static FREQUENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Frequency:\s+([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)")
        .expect("frequency pattern is valid")
});

// Lowercase "mass" keeps this distinct from the geometry header.
static DISPLACEMENT_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*X\s+Y\s+Z\s+mass\b").expect("displacement header pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    /// Saw "Frequency:", waiting for the "X Y Z mass" header.
    AwaitingHeader,
    /// Inside the per-atom rows.
    Rows,
}

#[derive(Debug)]
struct OpenMode {
    start_line: usize,
    state: BlockState,
    mode: VibrationalMode,
}

/// Collects every vibrational mode of a report.
///
/// A "Frequency: <number>" line opens a mode. An "X Y Z mass" line after it
/// starts the displacement rows, and a blank line closes the mode whatever state
/// it is in, so a mode whose header never appeared ends up with no rows.
#[derive(Debug, Default)]
pub struct VibrationParser {
    table: ModeTable,
    current: Option<OpenMode>,
}

impl VibrationParser {
    fn close_current(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };
        debug!(
            start_line = open.start_line,
            frequency = open.mode.frequency,
            rows = open.mode.len(),
            "Closed vibrational mode."
        );
        let frequency = open.mode.frequency;
        if self.table.insert(open.mode).is_some() {
            warn!(
                frequency,
                start_line = open.start_line,
                "Duplicate frequency; the later mode replaces the earlier one in the lookup table."
            );
        }
    }
}

impl ReportSection for VibrationParser {
    type Output = ModeTable;

    fn feed_line(&mut self, line_num: usize, line: &str) -> Result<(), ReportError> {
        if let Some(caps) = FREQUENCY_RE.captures(line) {
            self.close_current();
            let value = &caps[1];
            let frequency: f64 = value.parse().map_err(|_| ReportError::Parse {
                line: line_num,
                kind: ParseErrorKind::InvalidFrequency {
                    value: value.to_string(),
                },
            })?;
            self.current = Some(OpenMode {
                start_line: line_num,
                state: BlockState::AwaitingHeader,
                mode: VibrationalMode::new(frequency),
            });
            return Ok(());
        }

        let Some(state) = self.current.as_ref().map(|open| open.state) else {
            return Ok(());
        };

        if is_blank(line) {
            self.close_current();
            return Ok(());
        }

        match state {
            BlockState::AwaitingHeader => {
                if DISPLACEMENT_HEADER_RE.is_match(line) {
                    if let Some(open) = self.current.as_mut() {
                        open.state = BlockState::Rows;
                    }
                }
            }
            BlockState::Rows => {
                if is_separator(line) {
                    return Ok(());
                }
                let (label, vector) = parse_atom_row(line_num, line)?;
                if let Some(open) = self.current.as_mut() {
                    open.mode.push(Displacement::new(&label, vector));
                }
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Self::Output, ReportError> {
        self.close_current();
        if self.table.is_empty() {
            return Err(ReportError::EmptyInput {
                section: "frequency",
            });
        }
        Ok(self.table)
    }
}

/// Parses every vibrational mode of `text` into a [`ModeTable`].
pub fn parse_vibrations(text: &str) -> Result<ModeTable, ReportError> {
    VibrationParser::parse_str(text)
}
