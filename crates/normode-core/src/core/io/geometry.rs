use super::error::ReportError;
use super::rows::{is_blank, is_separator, parse_atom_row};
use super::traits::ReportSection;
use crate::core::models::atom::Atom;
use crate::core::models::geometry::Geometry;
use nalgebra::Point3;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static GEOMETRY_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*Center\s+X\s+Y\s+Z\s+Mass\b").expect("geometry header pattern is valid")
});

/// Returns `true` if `line` opens a geometry block.
pub fn is_geometry_header(line: &str) -> bool {
    GEOMETRY_HEADER_RE.is_match(line)
}

#[derive(Debug)]
struct OpenBlock {
    start_line: usize,
    atoms: Vec<Atom>,
}

/// Collects every geometry block of a report.
///
/// A block opens on a "Center X Y Z Mass" header and closes on the first blank
/// line after it. Rows made only of dash groups are skipped; every other row must
/// be `label x y z [mass ...]`. A block still open at end of input has no
/// terminating blank line and is dropped.
#[derive(Debug, Default)]
pub struct GeometryParser {
    completed: Vec<Geometry>,
    current: Option<OpenBlock>,
}

impl ReportSection for GeometryParser {
    type Output = Vec<Geometry>;

    fn feed_line(&mut self, line_num: usize, line: &str) -> Result<(), ReportError> {
        if is_geometry_header(line) {
            if let Some(block) = self.current.take() {
                warn!(
                    start_line = block.start_line,
                    "Geometry block interrupted by a new header before a blank line; discarding it."
                );
            }
            self.current = Some(OpenBlock {
                start_line: line_num,
                atoms: Vec::new(),
            });
            return Ok(());
        }

        if self.current.is_none() {
            return Ok(());
        }

        if is_blank(line) {
            if let Some(block) = self.current.take() {
                debug!(
                    start_line = block.start_line,
                    atoms = block.atoms.len(),
                    "Closed geometry block."
                );
                self.completed.push(Geometry::new(block.atoms));
            }
            return Ok(());
        }
        if is_separator(line) {
            return Ok(());
        }

        let (label, coords) = parse_atom_row(line_num, line)?;
        if let Some(block) = self.current.as_mut() {
            block.atoms.push(Atom::new(&label, Point3::from(coords)));
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Output, ReportError> {
        if let Some(block) = self.current {
            warn!(
                start_line = block.start_line,
                atoms = block.atoms.len(),
                "Geometry block not terminated by a blank line before end of input; discarding it."
            );
        }
        if self.completed.is_empty() {
            return Err(ReportError::EmptyInput {
                section: "geometry",
            });
        }
        Ok(self.completed)
    }
}

/// Parses every complete geometry block of `text`, in file order.
pub fn parse_geometries(text: &str) -> Result<Vec<Geometry>, ReportError> {
    GeometryParser::parse_str(text)
}

/// Returns the last complete geometry block of `text`.
pub fn final_geometry(text: &str) -> Result<Geometry, ReportError> {
    parse_geometries(text)?
        .pop()
        .ok_or(ReportError::EmptyInput {
            section: "geometry",
        })
}
