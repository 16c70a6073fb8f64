//! Parsing of quantum-chemistry calculation reports.
//!
//! A report is scanned twice by two independent parsers: [`geometry`] collects the
//! "Center X Y Z Mass" blocks and [`vibration`] collects the "Frequency:" blocks.
//! Both are driven line by line through the [`traits::ReportSection`] interface and
//! share one row tokeniser.

pub mod error;
pub mod geometry;
mod rows;
pub mod traits;
pub mod vibration;
