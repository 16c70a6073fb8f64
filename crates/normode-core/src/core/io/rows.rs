use super::error::{ParseErrorKind, ReportError};
use nalgebra::Vector3;

/// Returns `true` for a line whose every whitespace-separated token is made of
/// dashes, e.g. `----------` or `------   --------   --------`.
pub(super) fn is_separator(line: &str) -> bool {
    !line.trim().is_empty()
        && line
            .split_whitespace()
            .all(|token| token.chars().all(|c| c == '-'))
}

pub(super) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits an atom row of the form `label x y z [mass ...]`.
///
/// Any run of whitespace separates fields; columns after the third coordinate
/// are ignored.
pub(super) fn parse_atom_row(
    line_num: usize,
    line: &str,
) -> Result<(String, Vector3<f64>), ReportError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(ReportError::Parse {
            line: line_num,
            kind: ParseErrorKind::TooFewFields {
                found: fields.len(),
            },
        });
    }

    let coord = |idx: usize, field: &'static str| -> Result<f64, ReportError> {
        fields[idx].parse().map_err(|_| ReportError::Parse {
            line: line_num,
            kind: ParseErrorKind::InvalidFloat {
                field,
                value: fields[idx].to_string(),
            },
        })
    };

    let x = coord(1, "x")?;
    let y = coord(2, "y")?;
    let z = coord(3, "z")?;
    Ok((fields[0].to_string(), Vector3::new(x, y, z)))
}
