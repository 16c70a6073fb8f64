//! # Engine Module
//!
//! The logic layer that turns parsed data into something a renderer can draw.
//!
//! - **Connectivity** ([`connectivity`]) - Greedy nearest-neighbour bond inference
//!   driven by a per-element bond-count table.
//! - **Animation** ([`animation`]) - Ping-pong scale cycles and the endless,
//!   pull-based [`animation::FrameSampler`].
//! - **Configuration** ([`config`]) - Validated visualization settings.
//! - **Progress Monitoring** ([`progress`]) - Callback-based phase and task events.
//! - **Error Handling** ([`error`]) - The aggregated [`error::EngineError`].

pub mod animation;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod progress;
