//! Tests for isoline extraction over hand-built grids.

use contour_engine::{
    classify, edge_position, edges_for, segments, AmbiguousResolution, CellCase, ContourBuilder,
    ContourError, Edge, Grid, InterpolationMode, Point,
};
use test_utils::fixtures::{golden, spacing};
use test_utils::{
    assert_approx_eq, assert_coords_approx_eq, corners_for_case, corners_for_case_scaled,
    create_checkerboard_grid, create_constant_grid, create_radial_grid, create_ramp_grid,
    create_wavy_grid, single_cell_values,
};

fn single_cell(corners: [f32; 4], spacing: f32) -> Grid {
    Grid::from_values(1, 1, spacing, &single_cell_values(corners)).unwrap()
}

fn build(grid: &Grid) -> Vec<Point> {
    ContourBuilder::default().build(grid).unwrap()
}

/// Which edge of the unit-spaced cell at the origin a point lies on.
fn edge_of(p: Point, spacing: f32) -> Option<Edge> {
    let eps = 1e-5;
    if p.y.abs() < eps {
        Some(Edge::Bottom)
    } else if (p.y - spacing).abs() < eps {
        Some(Edge::Top)
    } else if p.x.abs() < eps {
        Some(Edge::Left)
    } else if (p.x - spacing).abs() < eps {
        Some(Edge::Right)
    } else {
        None
    }
}

fn root(x0: f32, f0: f32, x1: f32, f1: f32) -> f32 {
    x0 - f0 * (x1 - x0) / (f1 - f0)
}

// ============================================================================
// classification tests
// ============================================================================

#[test]
fn test_classify_matches_corner_bits() {
    for index in 0u8..16 {
        let [bl, br, tr, tl] = corners_for_case(index);
        assert_eq!(classify(bl, br, tr, tl).index(), index as usize);
    }
}

#[test]
fn test_grid_cell_case_matches_classify() {
    for index in 0u8..16 {
        let grid = single_cell(corners_for_case(index), spacing::UNIT);
        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.case().index(), index as usize);
    }
}

// ============================================================================
// uniform cells
// ============================================================================

#[test]
fn test_case_0_and_15_emit_nothing() {
    for scale in [0.001f32, 1.0, 1000.0] {
        assert!(build(&single_cell(corners_for_case_scaled(0, scale, scale), 1.0)).is_empty());
        assert!(build(&single_cell(corners_for_case_scaled(15, scale, scale), 1.0)).is_empty());
    }
}

#[test]
fn test_zero_valued_field_is_outside() {
    let grid = Grid::from_values(3, 3, 1.0, &create_constant_grid(3, 3, 0.0)).unwrap();
    assert!(build(&grid).is_empty());
}

// ============================================================================
// single-pair cases
// ============================================================================

#[test]
fn test_single_pair_cases_emit_two_points_on_named_edges() {
    let s = spacing::DEFAULT;
    for case in CellCase::all().filter(|c| !c.is_uniform() && !c.is_ambiguous()) {
        let corners = corners_for_case(case.index() as u8);
        let points = build(&single_cell(corners, s));
        assert_eq!(points.len(), 2, "{}", case);

        let (from, to) = edges_for(case)[0];
        assert_eq!(edge_of(points[0], s), Some(from), "{}", case);
        assert_eq!(edge_of(points[1], s), Some(to), "{}", case);
    }
}

#[test]
fn test_case_1_interpolation_formula() {
    let s = 10.0;
    let [bl, br, tr, tl] = corners_for_case(1);
    let points = build(&single_cell([bl, br, tr, tl], s));

    // (left, bottom)
    assert_eq!(points.len(), 2);
    assert_coords_approx_eq!((points[0].x, points[0].y), (0.0, root(s, tl, 0.0, bl)), 1e-5);
    assert_coords_approx_eq!((points[1].x, points[1].y), (root(0.0, bl, s, br), 0.0), 1e-5);
}

#[test]
fn test_points_stay_within_their_edge() {
    let s = spacing::DEFAULT;
    for index in 1u8..15 {
        let corners = corners_for_case_scaled(index, 7.0, 0.01);
        for p in build(&single_cell(corners, s)) {
            assert!(p.x >= 0.0 && p.x <= s, "case {} x={}", index, p.x);
            assert!(p.y >= 0.0 && p.y <= s, "case {} y={}", index, p.y);
        }
    }
}

// ============================================================================
// saddle cases
// ============================================================================

#[test]
fn test_saddles_emit_two_independent_segments() {
    for index in [5u8, 10] {
        let points = build(&single_cell(corners_for_case(index), 1.0));
        assert_eq!(points.len(), 4);

        // No segment is a diagonal: each one joins two adjacent edges.
        for seg in segments(&points) {
            let from = edge_of(seg.start, 1.0).unwrap();
            let to = edge_of(seg.end, 1.0).unwrap();
            let opposite = matches!(
                (from, to),
                (Edge::Left, Edge::Right)
                    | (Edge::Right, Edge::Left)
                    | (Edge::Top, Edge::Bottom)
                    | (Edge::Bottom, Edge::Top)
            );
            assert!(!opposite);
            assert_ne!(from, to);
        }
    }
}

#[test]
fn test_saddle_golden_points() {
    let grid = Grid::from_values(1, 1, spacing::UNIT, &golden::SADDLE5_VALUES).unwrap();
    assert_eq!(grid.cell(0, 0).unwrap().case().index(), 5);

    let points = build(&grid);
    assert_eq!(points.len(), golden::SADDLE5_POINTS.len());
    for (p, &(x, y)) in points.iter().zip(golden::SADDLE5_POINTS.iter()) {
        assert_coords_approx_eq!((p.x, p.y), (x, y), 1e-6);
    }
}

#[test]
fn test_checkerboard_all_saddles() {
    let grid = Grid::from_values(3, 4, 1.0, &create_checkerboard_grid(3, 4)).unwrap();
    let points = build(&grid);
    assert_eq!(points.len(), 3 * 4 * 4);
}

#[test]
fn test_center_average_keeps_segment_count() {
    let grid = Grid::from_values(3, 4, 1.0, &create_checkerboard_grid(3, 4)).unwrap();
    let builder = ContourBuilder::new(AmbiguousResolution::CenterAverage, InterpolationMode::Linear);
    assert_eq!(builder.build(&grid).unwrap().len(), 3 * 4 * 4);
}

#[test]
fn test_center_average_differs_from_always_split() {
    // Case 5 with a negative centre
    let corners = [0.5, -4.0, 0.5, -4.0];
    let grid = single_cell(corners, 1.0);

    let split = ContourBuilder::default().build(&grid).unwrap();
    let center = ContourBuilder::new(AmbiguousResolution::CenterAverage, InterpolationMode::Linear)
        .build(&grid)
        .unwrap();

    assert_eq!(split.len(), 4);
    assert_eq!(center.len(), 4);
    assert_ne!(split, center);

    // The same four crossing points, paired differently
    let mut a: Vec<(u32, u32)> = split.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
    let mut b: Vec<(u32, u32)> = center.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

// ============================================================================
// symmetry and determinism
// ============================================================================

#[test]
fn test_sign_flip_gives_identical_points() {
    for case in CellCase::all().filter(|c| !c.is_uniform()) {
        let corners = corners_for_case(case.index() as u8);
        let flipped = corners.map(|v| -v);
        assert_eq!(classify(flipped[0], flipped[1], flipped[2], flipped[3]), case.complement());

        let a = build(&single_cell(corners, spacing::DEFAULT));
        let b = build(&single_cell(flipped, spacing::DEFAULT));

        if case.is_ambiguous() {
            // Saddles swap pairing but cross the same edges at the same places
            let mut a: Vec<_> = a.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            let mut b: Vec<_> = b.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
            a.sort();
            b.sort();
            assert_eq!(a, b, "{}", case);
        } else {
            assert_eq!(a, b, "{}", case);
        }
    }
}

#[test]
fn test_shared_edge_points_agree_between_neighbours() {
    let rows = 6;
    let cols = 9;
    let grid = Grid::from_values(rows, cols, 2.0, &create_wavy_grid(rows, cols)).unwrap();

    for y in 0..rows {
        for x in 0..cols - 1 {
            let left_cell = grid.cell(x, y).unwrap();
            let right_cell = grid.cell(x + 1, y).unwrap();
            if (left_cell.tr.val > 0.0) != (left_cell.br.val > 0.0) {
                let a = left_cell.crossing(Edge::Right, InterpolationMode::Linear, 2.0).unwrap();
                let b = right_cell.crossing(Edge::Left, InterpolationMode::Linear, 2.0).unwrap();
                assert_eq!(a, b);
            }
        }
    }
}

#[test]
fn test_build_is_idempotent() {
    let grid = Grid::from_values(20, 30, 5.0, &create_wavy_grid(20, 30)).unwrap();
    let builder = ContourBuilder::default();

    let first = builder.build(&grid).unwrap();
    let second = builder.build(&grid).unwrap();

    assert!(!first.is_empty());
    let first_bits: Vec<u32> = first.iter().flat_map(|p| [p.x.to_bits(), p.y.to_bits()]).collect();
    let second_bits: Vec<u32> =
        second.iter().flat_map(|p| [p.x.to_bits(), p.y.to_bits()]).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn test_output_is_always_even() {
    let grid = Grid::from_values(15, 15, 1.0, &create_wavy_grid(15, 15)).unwrap();
    for y in 0..15 {
        for cell in grid.row_cells(y) {
            let mut out = Vec::new();
            ContourBuilder::default().build_cell(&cell, 1.0, &mut out).unwrap();
            assert!(matches!(out.len(), 0 | 2 | 4));
        }
    }
}

// ============================================================================
// end-to-end grids
// ============================================================================

#[test]
fn test_case6_golden_grid() {
    let grid = Grid::from_values(
        golden::CASE6_ROWS,
        golden::CASE6_COLS,
        spacing::DEFAULT,
        &golden::CASE6_VALUES,
    )
    .unwrap();

    let cell = grid.cell(0, 0).unwrap();
    assert_eq!(cell.case().index(), 6);
    assert_eq!(edges_for(cell.case()), &[(Edge::Top, Edge::Bottom)]);

    let points = build(&grid);
    let expected: Vec<Point> = golden::CASE6_POINTS
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();
    assert_eq!(points, expected);
}

#[test]
fn test_ramp_produces_vertical_line() {
    let rows = 5;
    let grid = Grid::from_values(rows, 6, 1.0, &create_ramp_grid(rows, 6, 2.25)).unwrap();
    let points = build(&grid);

    assert_eq!(points.len(), rows * 2);
    for p in &points {
        assert_approx_eq!(p.x, 2.25, 1e-5);
    }
}

#[test]
fn test_radial_contour_near_circle() {
    let n = 40;
    let radius = 12.0;
    let grid = Grid::from_values(n, n, 1.0, &create_radial_grid(n, n, radius)).unwrap();
    let points = build(&grid);

    assert!(points.len() > 40);
    let center = n as f32 / 2.0;
    for p in &points {
        let d = ((p.x - center).powi(2) + (p.y - center).powi(2)).sqrt();
        assert_approx_eq!(d, radius, 0.1);
    }
}

// ============================================================================
// interpolation modes and errors
// ============================================================================

#[test]
fn test_midpoint_mode_uses_edge_midpoints() {
    let s = spacing::DEFAULT;
    let grid = single_cell(corners_for_case(3), s);
    let builder = ContourBuilder::new(AmbiguousResolution::AlwaysSplit, InterpolationMode::Midpoint);
    let points = builder.build(&grid).unwrap();

    let origin = Point::new(0.0, 0.0);
    assert_eq!(
        points,
        vec![
            edge_position(origin, Edge::Left, s),
            edge_position(origin, Edge::Right, s),
        ]
    );
}

#[test]
fn test_linear_points_share_axis_with_midpoints() {
    let s = 4.0;
    let grid = Grid::from_values(3, 3, s, &create_wavy_grid(3, 3)).unwrap();
    let linear = ContourBuilder::default().build(&grid).unwrap();
    let midpoint = ContourBuilder::new(AmbiguousResolution::AlwaysSplit, InterpolationMode::Midpoint)
        .build(&grid)
        .unwrap();

    assert_eq!(linear.len(), midpoint.len());
    for (l, m) in linear.iter().zip(midpoint.iter()) {
        // Each crossing lies on the same edge line as its template midpoint
        assert!(l.x == m.x || l.y == m.y);
    }
}

#[test]
fn test_non_finite_values_rejected() {
    let err = Grid::from_values(1, 1, 1.0, &[f32::NAN, 1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, ContourError::NonFiniteSample { .. }));

    let err = Grid::from_values(1, 1, 1.0, &[1.0, f32::INFINITY, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, ContourError::NonFiniteSample { .. }));
}

#[test]
fn test_invalid_grid_geometry_rejected() {
    assert!(matches!(
        Grid::from_values(0, 1, 1.0, &[1.0, 1.0]),
        Err(ContourError::InvalidConfig(_))
    ));
    assert!(matches!(
        Grid::from_values(1, 1, 0.0, &[1.0; 4]),
        Err(ContourError::InvalidConfig(_))
    ));
}
