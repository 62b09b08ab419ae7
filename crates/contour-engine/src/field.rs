//! Scalar field sampling onto a regular grid.
//!
//! Vertex `(x, y)` sits at `(x * spacing, y * spacing)` with `y` growing
//! upwards, and is stored row-major at index `y * (cols + 1) + x`.

use crate::classify::{classify, CellCase};
use crate::config::{checked_vertex_count, EngineConfig};
use crate::edge_table::{edge_position, Edge};
use crate::error::{ContourError, Result};
use crate::interpolate::{interpolate_x, interpolate_y, InterpolationMode};
use crate::types::{Point, SamplePoint};

/// A time-varying 2D scalar field.
///
/// Implementations must be deterministic: the same `(x, y, t)` always
/// yields the same value.
pub trait ScalarField {
    fn sample(&self, x: f64, y: f64, t: f64) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64, t: f64) -> f64 {
        self(x, y, t)
    }
}

/// Sampled vertices for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    spacing: f32,
    points: Vec<SamplePoint>,
}

impl Grid {
    /// An unsampled grid with room for every vertex.
    pub fn empty(rows: usize, cols: usize, spacing: f32) -> Self {
        Self {
            rows,
            cols,
            spacing,
            points: Vec::with_capacity(checked_vertex_count(rows, cols).unwrap_or(0)),
        }
    }

    /// Build a grid from row-major vertex values, bottom row first.
    pub fn from_values(rows: usize, cols: usize, spacing: f32, values: &[f32]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(ContourError::invalid_config("grid must have at least one cell"));
        }
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(ContourError::invalid_config(format!(
                "grid_spacing must be > 0, got {}",
                spacing
            )));
        }

        let expected = checked_vertex_count(rows, cols).ok_or_else(|| {
            ContourError::invalid_config(format!("grid of {} x {} cells is too large", rows, cols))
        })?;
        if values.len() != expected {
            return Err(ContourError::GridShape {
                expected,
                actual: values.len(),
            });
        }

        let mut grid = Self::empty(rows, cols, spacing);
        for (i, &val) in values.iter().enumerate() {
            let x = i % (cols + 1);
            let y = i / (cols + 1);
            if !val.is_finite() {
                return Err(ContourError::NonFiniteSample {
                    x: x as f64,
                    y: y as f64,
                    t: 0.0,
                    value: val as f64,
                });
            }
            grid.points.push(SamplePoint::new(
                x as f32 * spacing,
                y as f32 * spacing,
                val,
            ));
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// All vertices, row-major, bottom row first.
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SamplePoint> {
        self.points
    }

    /// Whether every vertex has been sampled.
    pub fn is_complete(&self) -> bool {
        checked_vertex_count(self.rows, self.cols) == Some(self.points.len())
    }

    /// Vertex at column `x`, row `y`.
    pub fn vertex(&self, x: usize, y: usize) -> Option<&SamplePoint> {
        if x > self.cols || y > self.rows {
            return None;
        }
        let index = y.checked_mul(self.cols.checked_add(1)?)?.checked_add(x)?;
        self.points.get(index)
    }

    /// Cell whose bottom-left vertex is `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(Cell {
            x,
            y,
            bl: *self.vertex(x, y)?,
            br: *self.vertex(x + 1, y)?,
            tr: *self.vertex(x + 1, y + 1)?,
            tl: *self.vertex(x, y + 1)?,
        })
    }

    /// Cells of row `y`, left to right.
    pub fn row_cells(&self, y: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).filter_map(move |x| self.cell(x, y))
    }

    /// Minimum and maximum vertex value, or `None` for an unsampled grid.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(min, max), p| (min.min(p.val), max.max(p.val)),
        ))
    }
}

/// The four corners of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub bl: SamplePoint,
    pub br: SamplePoint,
    pub tr: SamplePoint,
    pub tl: SamplePoint,
}

impl Cell {
    /// Corner values as `[bl, br, tr, tl]`.
    pub fn corner_values(&self) -> [f32; 4] {
        [self.bl.val, self.br.val, self.tr.val, self.tl.val]
    }

    pub fn case(&self) -> CellCase {
        classify(self.bl.val, self.br.val, self.tr.val, self.tl.val)
    }

    /// Position of the bottom-left corner.
    pub fn origin(&self) -> Point {
        self.bl.pos
    }

    /// Where the contour crosses `edge`.
    ///
    /// Each edge always reads its corners in the same order (left: tl→bl,
    /// bottom: bl→br, top: tl→tr, right: tr→br), so a shared edge yields the
    /// same point from either neighbouring cell.
    pub fn crossing(&self, edge: Edge, mode: InterpolationMode, spacing: f32) -> Result<Point> {
        match mode {
            InterpolationMode::Midpoint => Ok(edge_position(self.origin(), edge, spacing)),
            InterpolationMode::Linear => match edge {
                Edge::Left => interpolate_y(&self.tl, &self.bl),
                Edge::Bottom => interpolate_x(&self.bl, &self.br),
                Edge::Top => interpolate_x(&self.tl, &self.tr),
                Edge::Right => interpolate_y(&self.tr, &self.br),
            },
        }
    }
}

/// Samples a [`ScalarField`] at every grid vertex.
#[derive(Debug, Clone)]
pub struct FieldSampler<F> {
    field: F,
    rows: usize,
    cols: usize,
    spacing: f32,
    noise_width: f64,
    noise_height: f64,
    value_scale: f64,
}

impl<F: ScalarField> FieldSampler<F> {
    /// Create a sampler for the grid described by `config`.
    pub fn new(field: F, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            field,
            rows: config.rows,
            cols: config.cols,
            spacing: config.grid_spacing,
            noise_width: config.noise_width,
            noise_height: config.noise_height,
            value_scale: config.value_scale,
        })
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Sample a fresh grid at time `t`.
    pub fn sample_grid(&self, t: f64) -> Result<Grid> {
        let mut grid = Grid::empty(self.rows, self.cols, self.spacing);
        self.sample_into(t, &mut grid)?;
        Ok(grid)
    }

    /// Replace the contents of `grid` with samples at time `t`.
    ///
    /// On failure the grid is left empty.
    pub fn sample_into(&self, t: f64, grid: &mut Grid) -> Result<()> {
        grid.rows = self.rows;
        grid.cols = self.cols;
        grid.spacing = self.spacing;
        grid.points.clear();
        grid.points.reserve(checked_vertex_count(self.rows, self.cols).unwrap_or(0));

        let x_step = self.noise_width / (self.cols + 1) as f64;
        let y_step = self.noise_height / (self.rows + 1) as f64;

        for y in 0..=self.rows {
            for x in 0..=self.cols {
                let nx = x as f64 * x_step;
                let ny = y as f64 * y_step;
                let raw = self.field.sample(nx, ny, t);
                let val = (raw * self.value_scale) as f32;

                if !val.is_finite() {
                    grid.points.clear();
                    return Err(ContourError::NonFiniteSample {
                        x: nx,
                        y: ny,
                        t,
                        value: raw,
                    });
                }

                grid.points.push(SamplePoint::new(
                    x as f32 * self.spacing,
                    y as f32 * self.spacing,
                    val,
                ));
            }
        }

        Ok(())
    }
}
