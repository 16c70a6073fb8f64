//! # normode Core Library
//!
//! Reads the text report of a quantum-chemistry frequency calculation, recovers the
//! final molecular geometry together with every vibrational normal mode, infers a
//! bond graph from interatomic distances, and samples looping displacement frames
//! that a rendering layer can draw.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each concern can be tested in
//! isolation.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Geometry`, `ModeTable`,
//!   `BondGraph`) and the two independent report parsers.
//!
//! - **[`engine`]: The Logic Core.** Connectivity inference, the animation sampler,
//!   configuration, progress reporting and the error taxonomy.
//!
//! - **[`workflows`]: The Public API.** Ties parsing, connectivity and sampling
//!   together into a [`workflows::visualize::Scene`] that a renderer consumes.

pub mod core;
pub mod engine;
pub mod workflows;
