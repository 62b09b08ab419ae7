//! Configuration for the isoline engine.
//!
//! Grid geometry is fixed for the lifetime of an engine; everything here is
//! checked once by [`EngineConfig::validate`] before any frame is computed.

use crate::edge_table::AmbiguousResolution;
use crate::error::{ContourError, Result};
use crate::interpolate::InterpolationMode;
use crate::types::SamplePoint;
use serde::{Deserialize, Serialize};

/// Default canvas edge length the default grid is derived from.
pub const DEFAULT_CANVAS_SIZE: u32 = 800;

/// Default distance between adjacent grid vertices.
pub const DEFAULT_GRID_SPACING: f32 = 20.0;

/// Configuration for sampling and contouring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distance between adjacent grid vertices in output units.
    pub grid_spacing: f32,

    /// Number of cell rows (the grid has `rows + 1` vertex rows).
    pub rows: usize,

    /// Number of cell columns (the grid has `cols + 1` vertex columns).
    pub cols: usize,

    /// Extent of the field domain covered horizontally.
    pub noise_width: f64,

    /// Extent of the field domain covered vertically.
    pub noise_height: f64,

    /// Factor applied to every raw field sample.
    pub value_scale: f64,

    /// How saddle cells (cases 5 and 10) are split.
    pub ambiguity: AmbiguousResolution,

    /// How crossing points are placed along an edge.
    pub interpolation: InterpolationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let cells = (DEFAULT_CANVAS_SIZE as f32 / DEFAULT_GRID_SPACING) as usize;
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
            rows: cells,
            cols: cells,
            noise_width: 5.0,
            noise_height: 5.0,
            value_scale: 2.0,
            ambiguity: AmbiguousResolution::default(),
            interpolation: InterpolationMode::default(),
        }
    }
}

impl EngineConfig {
    /// Derive the grid from a canvas size: one cell per `grid_spacing` units.
    pub fn from_canvas(width: u32, height: u32, grid_spacing: f32) -> Result<Self> {
        if !grid_spacing.is_finite() || grid_spacing <= 0.0 {
            return Err(ContourError::invalid_config(format!(
                "grid_spacing must be > 0, got {}",
                grid_spacing
            )));
        }

        let cols = (width as f32 / grid_spacing).floor() as usize;
        let rows = (height as f32 / grid_spacing).floor() as usize;

        let config = Self {
            grid_spacing,
            rows,
            cols,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from a key lookup on top of `self`.
    ///
    /// Values that fail to parse are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ISOLINE_GRID_SPACING") {
            if let Ok(spacing) = val.parse() {
                self.grid_spacing = spacing;
            }
        }

        if let Some(val) = lookup("ISOLINE_ROWS") {
            if let Ok(rows) = val.parse() {
                self.rows = rows;
            }
        }

        if let Some(val) = lookup("ISOLINE_COLS") {
            if let Ok(cols) = val.parse() {
                self.cols = cols;
            }
        }

        if let Some(val) = lookup("ISOLINE_NOISE_WIDTH") {
            if let Ok(width) = val.parse() {
                self.noise_width = width;
            }
        }

        if let Some(val) = lookup("ISOLINE_NOISE_HEIGHT") {
            if let Ok(height) = val.parse() {
                self.noise_height = height;
            }
        }

        if let Some(val) = lookup("ISOLINE_AMBIGUITY") {
            if let Some(policy) = AmbiguousResolution::from_name(&val) {
                self.ambiguity = policy;
            }
        }

        if let Some(val) = lookup("ISOLINE_INTERPOLATION") {
            if let Some(mode) = InterpolationMode::from_name(&val) {
                self.interpolation = mode;
            }
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.grid_spacing.is_finite() || self.grid_spacing <= 0.0 {
            return Err(ContourError::invalid_config(format!(
                "grid_spacing must be > 0, got {}",
                self.grid_spacing
            )));
        }

        if self.rows == 0 {
            return Err(ContourError::invalid_config("rows must be > 0"));
        }

        if self.cols == 0 {
            return Err(ContourError::invalid_config("cols must be > 0"));
        }

        if checked_vertex_count(self.rows, self.cols).is_none() {
            return Err(ContourError::invalid_config(format!(
                "grid of {} x {} cells is too large",
                self.rows, self.cols
            )));
        }

        if !self.noise_width.is_finite() || self.noise_width <= 0.0 {
            return Err(ContourError::invalid_config("noise_width must be > 0"));
        }

        if !self.noise_height.is_finite() || self.noise_height <= 0.0 {
            return Err(ContourError::invalid_config("noise_height must be > 0"));
        }

        if !self.value_scale.is_finite() || self.value_scale == 0.0 {
            return Err(ContourError::invalid_config(
                "value_scale must be finite and non-zero",
            ));
        }

        Ok(())
    }

    /// Number of vertices in one sampled grid.
    ///
    /// Only meaningful for a configuration that passed [`Self::validate`].
    pub fn vertex_count(&self) -> usize {
        (self.rows + 1) * (self.cols + 1)
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// `(rows + 1) * (cols + 1)`, or `None` when that many vertices could not
/// be held in one buffer.
pub(crate) fn checked_vertex_count(rows: usize, cols: usize) -> Option<usize> {
    let count = rows.checked_add(1)?.checked_mul(cols.checked_add(1)?)?;
    let bytes = count.checked_mul(std::mem::size_of::<SamplePoint>())?;
    if bytes > isize::MAX as usize {
        return None;
    }
    Some(count)
}
