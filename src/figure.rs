//! The engine-agnostic drawing produced by one trace.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

/// A single traced line segment in figure space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

/// A line segment snapped to pixel coordinates for rasterization.
///
/// Produced by [`Figure::to_pixels`]. Coordinates are rounded only at this
/// point, so truncation error never feeds back into the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelSegment {
    pub start: IVec2,
    pub end: IVec2,
}

/// The complete drawing generated from one trace.
///
/// This is the hand-off point to the presentation layer: an ordered list of
/// line segments with no dependency on any drawing framework.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Segments in the order they were drawn.
    pub segments: Vec<LineSegment>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    /// Number of segments in the figure.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned bounds over every segment endpoint, as `(min, max)`
    /// corners. `None` for an empty figure.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self.segments.iter().flat_map(|s| [s.start, s.end]);
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some((min, max))
    }

    /// Shifts every segment by `offset`, e.g. to place the trace origin at
    /// the canvas center.
    pub fn translate(&mut self, offset: Vec2) {
        for segment in &mut self.segments {
            segment.start += offset;
            segment.end += offset;
        }
    }

    /// Rounds the segments to integer pixel coordinates, in drawing order.
    pub fn to_pixels(&self) -> Vec<PixelSegment> {
        self.segments
            .iter()
            .map(|s| PixelSegment {
                start: s.start.round().as_ivec2(),
                end: s.end.round().as_ivec2(),
            })
            .collect()
    }
}
