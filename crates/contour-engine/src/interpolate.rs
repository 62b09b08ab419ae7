//! Linear root finding along cell edges.

use crate::classify::is_inside;
use crate::error::{ContourError, Result};
use crate::types::{Point, SamplePoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How crossing points are placed on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Solve for the zero crossing of the linear ramp between the corners.
    #[default]
    Linear,
    /// Use the geometric midpoint of the edge.
    Midpoint,
}

impl InterpolationMode {
    /// Parse from string (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "midpoint" | "mid" => Some(Self::Midpoint),
            _ => None,
        }
    }

    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Midpoint => "midpoint",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Root of the line through `(x0, f0)` and `(x1, f1)`.
///
/// The endpoints must lie on opposite sides of the threshold; otherwise the
/// edge has no crossing and [`ContourError::DegenerateEdge`] is returned.
/// The root is solved in f64, so any finite f32 corner values give a point
/// on the edge.
#[inline]
pub fn lerp_root(x0: f32, f0: f32, x1: f32, f1: f32) -> Result<f32> {
    let degenerate = || ContourError::DegenerateEdge { x0, f0, x1, f1 };

    if is_inside(f0) == is_inside(f1) {
        return Err(degenerate());
    }

    let (x0d, f0d, x1d, f1d) = (x0 as f64, f0 as f64, x1 as f64, f1 as f64);
    let root = (x0d - f0d * (x1d - x0d) / (f1d - f0d)) as f32;
    if !root.is_finite() {
        return Err(degenerate());
    }
    Ok(root)
}

/// Crossing on a horizontal edge; y is taken from `left`.
#[inline]
pub fn interpolate_x(left: &SamplePoint, right: &SamplePoint) -> Result<Point> {
    let x = lerp_root(left.pos.x, left.val, right.pos.x, right.val)?;
    Ok(Point::new(x, left.pos.y))
}

/// Crossing on a vertical edge; x is taken from `top`.
#[inline]
pub fn interpolate_y(top: &SamplePoint, bottom: &SamplePoint) -> Result<Point> {
    let y = lerp_root(top.pos.y, top.val, bottom.pos.y, bottom.val)?;
    Ok(Point::new(top.pos.x, y))
}
