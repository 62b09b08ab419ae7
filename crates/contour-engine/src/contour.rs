//! Contour line (isoline) extraction using the marching squares algorithm.
//!
//! Every cell is classified, its crossing pattern looked up, and the
//! crossing points interpolated from the cell's own corner values. The
//! result is a flat line-list: each consecutive pair of points is one
//! segment. Segments are not joined into polylines.
//!
//! Cells are visited bottom row first, left to right, and each cell emits
//! its pairs in table order, so output is reproducible for a given grid.

use crate::config::EngineConfig;
use crate::edge_table::AmbiguousResolution;
use crate::error::{ContourError, Result};
use crate::field::{Cell, Grid};
use crate::interpolate::InterpolationMode;
use crate::types::Point;
use rayon::prelude::*;

/// Minimum cells to benefit from building rows in parallel
pub const PARALLEL_THRESHOLD: usize = 16_384; // 128x128 or larger

/// Turns sampled grids into isoline segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourBuilder {
    ambiguity: AmbiguousResolution,
    interpolation: InterpolationMode,
    parallel_threshold: usize,
}

impl Default for ContourBuilder {
    fn default() -> Self {
        Self::new(AmbiguousResolution::default(), InterpolationMode::default())
    }
}

impl ContourBuilder {
    pub fn new(ambiguity: AmbiguousResolution, interpolation: InterpolationMode) -> Self {
        Self {
            ambiguity,
            interpolation,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.ambiguity, config.interpolation)
    }

    /// Override the cell count at which rows are built in parallel.
    pub fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    pub fn ambiguity(&self) -> AmbiguousResolution {
        self.ambiguity
    }

    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Build the isoline line-list for `grid`.
    pub fn build(&self, grid: &Grid) -> Result<Vec<Point>> {
        let mut points = Vec::new();
        self.build_into(grid, &mut points)?;
        Ok(points)
    }

    /// Replace the contents of `out` with the isolines of `grid`.
    ///
    /// On failure `out` is left empty.
    pub fn build_into(&self, grid: &Grid, out: &mut Vec<Point>) -> Result<()> {
        out.clear();

        if !grid.is_complete() {
            return Err(ContourError::GridShape {
                expected: (grid.rows() + 1) * (grid.cols() + 1),
                actual: grid.points().len(),
            });
        }

        let result = if grid.rows() * grid.cols() >= self.parallel_threshold {
            self.build_parallel(grid, out)
        } else {
            self.build_sequential(grid, out)
        };

        if result.is_err() {
            out.clear();
        }
        result
    }

    fn build_sequential(&self, grid: &Grid, out: &mut Vec<Point>) -> Result<()> {
        for y in 0..grid.rows() {
            for cell in grid.row_cells(y) {
                self.build_cell(&cell, grid.spacing(), out)?;
            }
        }
        Ok(())
    }

    fn build_parallel(&self, grid: &Grid, out: &mut Vec<Point>) -> Result<()> {
        let rows: Vec<Vec<Point>> = (0..grid.rows())
            .into_par_iter()
            .map(|y| -> Result<Vec<Point>> {
                let mut row = Vec::new();
                for cell in grid.row_cells(y) {
                    self.build_cell(&cell, grid.spacing(), &mut row)?;
                }
                Ok(row)
            })
            .collect::<Result<_>>()?;

        out.reserve(rows.iter().map(Vec::len).sum());
        for row in rows {
            out.extend(row);
        }
        Ok(())
    }

    /// Append the segments of a single cell to `out`.
    ///
    /// Emits 0, 2 or 4 points.
    pub fn build_cell(&self, cell: &Cell, spacing: f32, out: &mut Vec<Point>) -> Result<()> {
        let case = cell.case();
        for &(from, to) in self.ambiguity.edges(case, cell.corner_values()) {
            let start = cell.crossing(from, self.interpolation, spacing)?;
            let end = cell.crossing(to, self.interpolation, spacing)?;
            out.push(start);
            out.push(end);
        }
        Ok(())
    }
}

/// Marching squares with the default policies.
pub fn march_squares(grid: &Grid) -> Result<Vec<Point>> {
    ContourBuilder::default().build(grid)
}
