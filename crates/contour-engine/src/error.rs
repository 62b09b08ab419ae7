//! Error types for isoline extraction.

use thiserror::Error;

/// Errors that can occur while sampling a field or building contours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    /// Grid geometry or engine options were rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The interpolator was handed an edge whose endpoints share a sign
    /// bucket. This means the classifier and the edge table disagree.
    #[error("degenerate edge: cannot find root between ({x0}, {f0}) and ({x1}, {f1})")]
    DegenerateEdge { x0: f32, f0: f32, x1: f32, f1: f32 },

    /// The scalar field returned NaN or an infinity.
    #[error("scalar field returned non-finite value {value} at ({x}, {y}, t={t})")]
    NonFiniteSample { x: f64, y: f64, t: f64, value: f64 },

    /// A hand-built grid does not have `(rows + 1) * (cols + 1)` vertices.
    #[error("grid shape mismatch: expected {expected} vertices, got {actual}")]
    GridShape { expected: usize, actual: usize },
}

impl ContourError {
    /// Create an InvalidConfig error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether this error points at a defect in the engine itself rather
    /// than at bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DegenerateEdge { .. })
    }
}

/// Result type for contour engine operations.
pub type Result<T> = std::result::Result<T, ContourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ContourError::invalid_config("rows must be > 0");
        assert_eq!(err.to_string(), "invalid configuration: rows must be > 0");

        let err = ContourError::GridShape {
            expected: 9,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 9"));
    }

    #[test]
    fn test_is_internal() {
        let degenerate = ContourError::DegenerateEdge {
            x0: 0.0,
            f0: 1.0,
            x1: 1.0,
            f1: 1.0,
        };
        assert!(degenerate.is_internal());
        assert!(!ContourError::invalid_config("x").is_internal());
    }
}
