//! Isoline extraction for time-varying 2D scalar fields.
//!
//! Implements marching squares over a regular grid at a fixed threshold of
//! zero:
//! - Field sampling onto grid vertices
//! - 4-bit cell classification
//! - Edge-crossing lookup, including the two saddle cases
//! - Linear root interpolation along cell edges
//!
//! # Pipeline
//!
//! ```text
//! time t
//!   │
//!   ▼
//! FieldSampler::sample_into   ──► Grid (rows+1 × cols+1 SamplePoints)
//!   │
//!   ▼
//! ContourBuilder::build_into  ──► Vec<Point> line-list
//!   │
//!   ▼
//! renderer (external)
//! ```
//!
//! # Example
//!
//! ```
//! use contour_engine::{EngineConfig, IsolineEngine, PerlinField};
//!
//! let mut engine = IsolineEngine::new(PerlinField::new(), EngineConfig::default())?;
//! let frame = engine.compute_frame(0.5)?;
//! assert_eq!(frame.vertices.len(), 41 * 41);
//! assert_eq!(frame.isolines.len() % 2, 0);
//! # Ok::<(), contour_engine::ContourError>(())
//! ```

pub mod classify;
pub mod config;
pub mod contour;
pub mod edge_table;
pub mod engine;
pub mod error;
pub mod field;
pub mod interpolate;
pub mod noise;
pub mod types;

// Re-export commonly used types at crate root
pub use classify::{classify, CellCase};
pub use config::EngineConfig;
pub use contour::{march_squares, ContourBuilder};
pub use edge_table::{edge_position, edges_for, AmbiguousResolution, Edge, EdgePair};
pub use engine::{Frame, IsolineEngine};
pub use error::{ContourError, Result};
pub use field::{Cell, FieldSampler, Grid, ScalarField};
pub use interpolate::{interpolate_x, interpolate_y, lerp_root, InterpolationMode};
pub use noise::PerlinField;
pub use types::{segments, Point, SamplePoint, Segment};
