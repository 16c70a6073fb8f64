//! # Workflows Module
//!
//! High-level entry points that run the whole pipeline: parse a report, keep its
//! final geometry, collect its vibrational modes, infer connectivity and hand
//! back a [`visualize::Scene`] from which animation frames can be pulled.

pub mod visualize;
