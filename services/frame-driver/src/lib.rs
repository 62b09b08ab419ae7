//! Headless frame driver for the isoline engine.
//!
//! This crate provides the pieces behind the `frame-driver` binary:
//! - YAML driver configuration with CLI overrides
//! - Frame sinks (JSON lines, log summary)
//! - The frame loop itself

pub mod config;
pub mod runner;
pub mod sink;

pub use config::DriverConfig;
pub use runner::{run, RunSummary};
pub use sink::{FrameRecord, FrameSink, JsonLinesSink, SummarySink};
