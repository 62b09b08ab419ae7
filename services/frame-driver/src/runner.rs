//! The per-frame loop: supply time, compute, hand off.

use crate::config::DriverConfig;
use crate::sink::FrameSink;
use anyhow::Context;
use contour_engine::{IsolineEngine, PerlinField};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Totals for a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub segments: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Mean wall time per frame.
    pub fn mean_frame_time(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.frames as f64)
    }
}

/// Compute every configured frame and pass each to `sink`.
///
/// Stops at the first failing frame.
pub fn run<S: FrameSink>(config: &DriverConfig, sink: &mut S) -> anyhow::Result<RunSummary> {
    config.validate()?;

    let field = match config.seed {
        Some(seed) => PerlinField::with_seed(seed),
        None => PerlinField::new(),
    };
    let mut engine =
        IsolineEngine::new(field, config.engine.clone()).context("failed to create engine")?;

    info!(
        frames = config.frames,
        rows = config.engine.rows,
        cols = config.engine.cols,
        start_time = config.start_time,
        time_step = config.time_step,
        "Starting frame loop"
    );

    let start = Instant::now();
    let mut segments = 0u64;

    for index in 0..config.frames {
        let t = config.frame_time(index);
        let frame = engine
            .compute_frame(t)
            .with_context(|| format!("frame {} at t={} failed", index, t))?;

        segments += frame.segment_count() as u64;
        sink.write_frame(index, &frame)?;
        debug!(frame = index, "Handed off frame");
    }

    sink.finish()?;

    let summary = RunSummary {
        frames: config.frames,
        segments,
        elapsed: start.elapsed(),
    };

    info!(
        frames = summary.frames,
        segments = summary.segments,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        mean_frame_us = summary.mean_frame_time().as_micros() as u64,
        "Frame loop complete"
    );

    Ok(summary)
}
