//! Marching squares edge-crossing lookup table.
//!
//! Maps each [`CellCase`] to the pairs of cell edges the contour passes
//! through. Entries only name edges; the actual crossing coordinates come
//! from the interpolator using the cell's real corner values.

use crate::classify::CellCase;
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use Edge::{Bottom, Left, Right, Top};

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Bottom,
    Top,
    Left,
    Right,
}

/// The contour enters through one edge and leaves through the other.
pub type EdgePair = (Edge, Edge);

/// Crossing pattern for every case, indexed by case number.
pub const EDGE_TABLE: [&[EdgePair]; 16] = [
    &[],                              // 0
    &[(Left, Bottom)],                // 1
    &[(Bottom, Right)],               // 2
    &[(Left, Right)],                 // 3
    &[(Top, Right)],                  // 4
    &[(Left, Top), (Bottom, Right)],  // 5 saddle
    &[(Top, Bottom)],                 // 6
    &[(Left, Top)],                   // 7
    &[(Left, Top)],                   // 8
    &[(Top, Bottom)],                 // 9
    &[(Left, Bottom), (Top, Right)],  // 10 saddle
    &[(Top, Right)],                  // 11
    &[(Left, Right)],                 // 12
    &[(Bottom, Right)],               // 13
    &[(Left, Bottom)],                // 14
    &[],                              // 15
];

/// Edge pairs for a case, straight from the table.
#[inline]
pub fn edges_for(case: CellCase) -> &'static [EdgePair] {
    EDGE_TABLE[case.index()]
}

/// Policy for splitting the two saddle cases.
///
/// Both policies emit two independent segments per saddle cell; they only
/// differ in which pair of opposite corners gets cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguousResolution {
    /// Always use the table entry for the case. Case 5 cuts off the
    /// top-left and bottom-right corners, case 10 the bottom-left and
    /// top-right ones, whatever the field does in the cell interior.
    #[default]
    AlwaysSplit,
    /// Average the four corners; when the centre lies on the other side of
    /// the threshold from what the table entry assumes, use the opposite
    /// saddle's pairing instead.
    CenterAverage,
}

impl AmbiguousResolution {
    /// Parse from string (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "always_split" | "split" => Some(Self::AlwaysSplit),
            "center_average" | "center" => Some(Self::CenterAverage),
            _ => None,
        }
    }

    /// Get the policy name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlwaysSplit => "always_split",
            Self::CenterAverage => "center_average",
        }
    }

    /// Edge pairs for a cell under this policy.
    ///
    /// `corners` is `[bl, br, tr, tl]`; it is only read for saddle cases
    /// under [`AmbiguousResolution::CenterAverage`].
    pub fn edges(self, case: CellCase, corners: [f32; 4]) -> &'static [EdgePair] {
        if self == Self::AlwaysSplit || !case.is_ambiguous() {
            return edges_for(case);
        }

        let center = corners.iter().sum::<f32>() / 4.0;
        // Case 5 (bl, tr inside) assumes the inside region joins through
        // the centre; case 10 (br, tl inside) assumes the same for its pair.
        if crate::classify::is_inside(center) {
            edges_for(case)
        } else {
            edges_for(case.complement())
        }
    }
}

impl fmt::Display for AmbiguousResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Midpoint of `edge` for the cell whose bottom-left vertex is at `origin`.
pub fn edge_position(origin: Point, edge: Edge, spacing: f32) -> Point {
    let half = 0.5 * spacing;
    match edge {
        Edge::Bottom => origin.offset(half, 0.0),
        Edge::Top => origin.offset(half, spacing),
        Edge::Left => origin.offset(0.0, half),
        Edge::Right => origin.offset(spacing, half),
    }
}
