//! Core value types shared by the sampler, builder and renderers.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A point in output coordinate space.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another, component-wise.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A sampled grid vertex: position plus the scaled field value.
///
/// Layout is a `vec2` position followed by one `float`, so a slice of
/// these can be uploaded directly as interleaved vertex data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct SamplePoint {
    pub pos: Point,
    pub val: f32,
}

impl SamplePoint {
    pub fn new(x: f32, y: f32, val: f32) -> Self {
        Self {
            pos: Point::new(x, y),
            val,
        }
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Iterate a flat line-list as segments.
///
/// A trailing unpaired point is ignored; the builder never produces one.
pub fn segments(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    points.chunks_exact(2).map(|pair| Segment {
        start: pair[0],
        end: pair[1],
    })
}
