//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, geometries, vibrational modes
//!   and the bond graph.
//! - **Report Parsing** ([`io`]) - Line-driven parsers that pull geometry and
//!   normal-mode blocks out of a calculation report.
//!
//! Everything produced here is read-only once parsing completes; the engine never
//! mutates a parsed geometry or mode table.

pub mod io;
pub mod models;
