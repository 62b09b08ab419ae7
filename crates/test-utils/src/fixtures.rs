//! Common test fixtures for isoline tests.
//!
//! This module provides pre-defined grids with hand-checked contour output.

/// Common grid spacings.
pub mod spacing {
    /// Default vertex spacing of the engine.
    pub const DEFAULT: f32 = 20.0;

    /// Unit spacing: positions equal grid indices.
    pub const UNIT: f32 = 1.0;
}

/// Golden grids and the line-lists they must produce.
pub mod golden {
    /// 2x2 cells whose left column is case 6 (bl=-1, br=1, tr=1, tl=-1)
    /// and whose right column is case 15.
    pub const CASE6_ROWS: usize = 2;
    pub const CASE6_COLS: usize = 2;
    pub const CASE6_VALUES: [f32; 9] = [
        -1.0, 1.0, 1.0, // row 0
        -1.0, 1.0, 1.0, // row 1
        -1.0, 1.0, 1.0, // row 2
    ];

    /// Expected `(x, y)` points at spacing 20: each case-6 cell emits its
    /// top crossing then its bottom crossing, both at the column midline.
    pub const CASE6_POINTS: [(f32, f32); 4] = [
        (10.0, 20.0),
        (10.0, 0.0),
        (10.0, 40.0),
        (10.0, 20.0),
    ];

    /// Single saddle cell: bl and tr inside (case 5).
    pub const SADDLE5_VALUES: [f32; 4] = [
        2.0, -1.0, // row 0: bl, br
        -1.0, 2.0, // row 1: tl, tr
    ];

    /// Expected points at unit spacing: (left, top) then (bottom, right).
    pub const SADDLE5_POINTS: [(f32, f32); 4] = [
        (0.0, 2.0 / 3.0),
        (1.0 / 3.0, 1.0),
        (2.0 / 3.0, 0.0),
        (1.0, 1.0 / 3.0),
    ];
}

/// Configuration file contents for driver tests.
pub mod config {
    /// A small, valid driver configuration.
    pub const DRIVER_YAML: &str = r#"
engine:
  grid_spacing: 10.0
  rows: 8
  cols: 12
  noise_width: 3.0
  noise_height: 2.0
frames: 3
start_time: 0.5
time_step: 0.25
seed: 7
"#;

    /// Configuration with a zero-sized grid.
    pub const INVALID_DRIVER_YAML: &str = r#"
engine:
  rows: 0
frames: 1
"#;
}
