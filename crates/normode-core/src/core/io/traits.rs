use super::error::ReportError;
use std::path::Path;

/// A line-driven parser for one kind of block in a calculation report.
///
/// Implementors keep only the accumulator of the block currently being read
/// plus the output completed so far; nothing is shared between parser instances,
/// so the geometry and vibration passes can run independently over the same text.
pub trait ReportSection: Default {
    /// What the parser yields once the whole report has been fed.
    type Output;

    /// Consumes one line of the report.
    ///
    /// # Arguments
    ///
    /// * `line_num` - One-based line number, used in error messages.
    /// * `line` - The line content without its terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] if the line belongs to a block and is malformed.
    fn feed_line(&mut self, line_num: usize, line: &str) -> Result<(), ReportError>;

    /// Closes any open block and returns the collected output.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyInput`] when no block of this kind was found.
    fn finish(self) -> Result<Self::Output, ReportError>;

    /// Parses a complete report held in memory.
    fn parse_str(text: &str) -> Result<Self::Output, ReportError> {
        let mut parser = Self::default();
        for (idx, line) in text.lines().enumerate() {
            parser.feed_line(idx + 1, line)?;
        }
        parser.finish()
    }

    /// Reads the whole file into memory, then parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file cannot be read, or any error
    /// produced by [`ReportSection::parse_str`].
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, ReportError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_str(&text)
    }
}
