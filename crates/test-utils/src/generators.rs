//! Synthetic scalar data for contour tests.
//!
//! Grids are returned as vertex values in row-major order, bottom row
//! first, matching `Grid::from_values`. A grid of `rows x cols` cells has
//! `(rows + 1) * (cols + 1)` values.

/// Corner values `[bl, br, tr, tl]` for a marching squares case.
///
/// Inside corners get distinct positive values and outside corners
/// distinct negative values, so no two corners share a magnitude.
///
/// # Example
///
/// ```
/// use test_utils::corners_for_case;
///
/// let [bl, br, tr, tl] = corners_for_case(1);
/// assert!(bl > 0.0 && br < 0.0 && tr < 0.0 && tl < 0.0);
/// ```
pub fn corners_for_case(case: u8) -> [f32; 4] {
    corners_for_case_scaled(case, 1.0, 1.0)
}

/// Like [`corners_for_case`] with separate scales for inside and outside.
pub fn corners_for_case_scaled(case: u8, inside_scale: f32, outside_scale: f32) -> [f32; 4] {
    assert!(case < 16, "case must be in 0..16, got {}", case);
    // Per-corner magnitudes so interpolated points are not all midpoints
    let magnitudes = [1.0f32, 2.0, 3.0, 0.5];
    let mut corners = [0.0f32; 4];
    for (bit, corner) in corners.iter_mut().enumerate() {
        *corner = if case & (1 << bit) != 0 {
            magnitudes[bit] * inside_scale
        } else {
            -magnitudes[bit] * outside_scale
        };
    }
    corners
}

/// Vertex values for a single-cell grid with the given corners.
///
/// Reorders `[bl, br, tr, tl]` into row-major storage `[bl, br, tl, tr]`.
pub fn single_cell_values(corners: [f32; 4]) -> Vec<f32> {
    let [bl, br, tr, tl] = corners;
    vec![bl, br, tl, tr]
}

/// Creates a grid with the same value everywhere.
pub fn create_constant_grid(rows: usize, cols: usize, value: f32) -> Vec<f32> {
    vec![value; (rows + 1) * (cols + 1)]
}

/// Creates a horizontal ramp `value = col - zero_col`.
///
/// The zero crossing is a vertical line at column `zero_col`.
pub fn create_ramp_grid(rows: usize, cols: usize, zero_col: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity((rows + 1) * (cols + 1));
    for _row in 0..=rows {
        for col in 0..=cols {
            data.push(col as f32 - zero_col);
        }
    }
    data
}

/// Creates a cone `value = radius - distance(center)`, in vertex units.
///
/// Positive inside the disc, so the isoline approximates a circle.
pub fn create_radial_grid(rows: usize, cols: usize, radius: f32) -> Vec<f32> {
    let cx = cols as f32 / 2.0;
    let cy = rows as f32 / 2.0;
    let mut data = Vec::with_capacity((rows + 1) * (cols + 1));
    for row in 0..=rows {
        for col in 0..=cols {
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            data.push(radius - (dx * dx + dy * dy).sqrt());
        }
    }
    data
}

/// Creates alternating +1 / -1 vertices. Every cell is a saddle.
pub fn create_checkerboard_grid(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity((rows + 1) * (cols + 1));
    for row in 0..=rows {
        for col in 0..=cols {
            data.push(if (row + col) % 2 == 0 { 1.0 } else { -1.0 });
        }
    }
    data
}

/// Creates a smooth wavy field with many sign changes.
pub fn create_wavy_grid(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity((rows + 1) * (cols + 1));
    for row in 0..=rows {
        for col in 0..=cols {
            let fx = col as f32 * 0.41;
            let fy = row as f32 * 0.29;
            data.push(fx.sin() + fy.cos() * 0.8 + (fx + fy).sin() * 0.3 + 0.05);
        }
    }
    data
}
