//! Axis-aligned rectangles for room placement.
//!
//! The boundary queries (`intersects`, `encloses`, `has_point`) are
//! inclusive on all edges: two rectangles sharing an edge count as
//! intersecting. Rasterization uses the half-open footprint from `inner`
//! instead. The asymmetry is intentional; corridor junction detection
//! relies on edge-touching rooms registering as occupied.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// A rectangle with corners (x1, y1) inclusive and (x2, y2) exclusive for
/// footprint purposes; x1 < x2 and y1 < y2 whenever width and height are
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Top-left corner.
    pub const fn position(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Bottom-right corner.
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Width and height as a point.
    pub const fn size(&self) -> Point {
        Point::new(self.x2 - self.x1, self.y2 - self.y1)
    }

    /// Center, rounded toward the top-left.
    pub const fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Half-open footprint ranges, for iterating the cells this rectangle
    /// covers.
    pub fn inner(&self) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        (self.x1..self.x2, self.y1..self.y2)
    }

    /// Check if this rectangle overlaps or touches another (edges
    /// inclusive).
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Check if another rectangle lies entirely within this one (edges
    /// inclusive).
    pub const fn encloses(&self, other: &Rect) -> bool {
        self.x1 <= other.x1 && self.x2 >= other.x2 && self.y1 <= other.y1 && self.y2 >= other.y2
    }

    /// Check if a point lies within this rectangle, edges inclusive.
    pub const fn has_point(&self, x: i32, y: i32) -> bool {
        self.x1 <= x && x <= self.x2 && self.y1 <= y && y <= self.y2
    }

    /// Return a rectangle with the same center, expanded by `margin` on
    /// every side.
    pub const fn grow(&self, margin: i32) -> Rect {
        Rect::new(
            self.x1 - margin,
            self.y1 - margin,
            (self.x2 - self.x1) + margin * 2,
            (self.y2 - self.y1) + margin * 2,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}
