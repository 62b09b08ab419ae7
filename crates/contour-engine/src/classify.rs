//! Cell classification against the zero threshold.
//!
//! Each corner contributes one bit: bottom-left = 1, bottom-right = 2,
//! top-right = 4, top-left = 8. A corner is "inside" only when strictly
//! greater than zero, so a value of exactly 0.0 counts as outside.

use std::fmt;

/// The iso-threshold. Fixed; contours are always extracted at zero.
pub const THRESHOLD: f32 = 0.0;

/// Whether a corner value is on the inside of the threshold.
#[inline(always)]
pub fn is_inside(value: f32) -> bool {
    value > THRESHOLD
}

/// One of the 16 marching squares topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCase(u8);

impl CellCase {
    /// All corners outside.
    pub const EMPTY: CellCase = CellCase(0);
    /// All corners inside.
    pub const FULL: CellCase = CellCase(15);

    /// Build a case from its index. Returns `None` above 15.
    pub fn new(index: u8) -> Option<Self> {
        (index < 16).then_some(Self(index))
    }

    /// The case index in `0..16`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The case with every corner flipped (1 <-> 14, 5 <-> 10, ...).
    pub fn complement(self) -> Self {
        Self(!self.0 & 0x0F)
    }

    /// Saddle configurations: diagonal corners agree, adjacent ones differ.
    pub fn is_ambiguous(self) -> bool {
        self.0 == 5 || self.0 == 10
    }

    /// Cases with no crossing at all.
    pub fn is_uniform(self) -> bool {
        self == Self::EMPTY || self == Self::FULL
    }

    /// Iterate all 16 cases in index order.
    pub fn all() -> impl Iterator<Item = CellCase> {
        (0u8..16).map(CellCase)
    }
}

impl fmt::Display for CellCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {}", self.0)
    }
}

/// Classify a cell from its corner values.
#[inline]
pub fn classify(bl: f32, br: f32, tr: f32, tl: f32) -> CellCase {
    CellCase(
        is_inside(bl) as u8
            | (is_inside(br) as u8) << 1
            | (is_inside(tr) as u8) << 2
            | (is_inside(tl) as u8) << 3,
    )
}
