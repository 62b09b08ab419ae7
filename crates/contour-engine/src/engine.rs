//! Per-frame orchestration: sample the field, then extract isolines.

use crate::config::EngineConfig;
use crate::contour::ContourBuilder;
use crate::error::Result;
use crate::field::{FieldSampler, Grid, ScalarField};
use crate::types::{Point, SamplePoint};
use std::time::Instant;
use tracing::{debug, trace};

/// Output of one frame, borrowed from the engine's buffers.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub time: f64,
    /// Every grid vertex, row-major, bottom row first.
    pub vertices: &'a [SamplePoint],
    /// Line-list: consecutive pairs are segment endpoints.
    pub isolines: &'a [Point],
}

impl Frame<'_> {
    pub fn segment_count(&self) -> usize {
        self.isolines.len() / 2
    }
}

/// Owns the grid geometry and the two output buffers.
///
/// Buffers are fully rewritten by every [`IsolineEngine::compute_frame`]
/// call; nothing carries over between frames except allocations.
#[derive(Debug)]
pub struct IsolineEngine<F> {
    config: EngineConfig,
    sampler: FieldSampler<F>,
    builder: ContourBuilder,
    grid: Grid,
    isolines: Vec<Point>,
}

impl<F: ScalarField> IsolineEngine<F> {
    /// Create an engine, rejecting invalid geometry up front.
    pub fn new(field: F, config: EngineConfig) -> Result<Self> {
        let sampler = FieldSampler::new(field, &config)?;
        let builder = ContourBuilder::from_config(&config);
        let grid = Grid::empty(config.rows, config.cols, config.grid_spacing);

        debug!(
            rows = config.rows,
            cols = config.cols,
            grid_spacing = config.grid_spacing,
            ambiguity = %config.ambiguity,
            interpolation = %config.interpolation,
            "Created isoline engine"
        );

        Ok(Self {
            config,
            sampler,
            builder,
            grid,
            isolines: Vec::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn builder(&self) -> &ContourBuilder {
        &self.builder
    }

    /// Sample the field at `t` and rebuild the isolines.
    ///
    /// On error both buffers are empty and the engine can be used again.
    pub fn compute_frame(&mut self, t: f64) -> Result<Frame<'_>> {
        let start = Instant::now();

        if let Err(e) = self.sampler.sample_into(t, &mut self.grid) {
            self.isolines.clear();
            return Err(e);
        }
        let sampled = start.elapsed();

        if let Err(e) = self.builder.build_into(&self.grid, &mut self.isolines) {
            self.grid = Grid::empty(self.config.rows, self.config.cols, self.config.grid_spacing);
            return Err(e);
        }

        let (value_min, value_max) = self.grid.value_range().unwrap_or((0.0, 0.0));
        trace!(value_min, value_max, "Field range");
        debug!(
            time = t,
            vertices = self.grid.points().len(),
            segments = self.isolines.len() / 2,
            value_min,
            value_max,
            sample_us = sampled.as_micros() as u64,
            total_us = start.elapsed().as_micros() as u64,
            "Computed frame"
        );

        Ok(Frame {
            time: t,
            vertices: self.grid.points(),
            isolines: &self.isolines,
        })
    }

    /// The grid sampled by the last successful frame.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
