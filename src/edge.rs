//! Scanline Edges

use crate::math::round_to_int;
use crate::point::Point;

use std::cmp::Ordering;

/// Monotonic-in-y line segment ready for scanline tests
///
/// The segment is stored as `x = m * y + b` and covers the pixel rows
/// `top .. bottom`. `winding` is +1 when the source segment pointed down
/// (increasing y) and -1 otherwise.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Slope, dx/dy
    pub m: f32,
    /// x intercept at y = 0
    pub b: f32,
    /// First covered row
    pub top: i32,
    /// One past the last covered row
    pub bottom: i32,
    /// Winding direction, +1 or -1
    pub winding: i32,
}

impl Edge {
    /// Create an edge from `p0` to `p1`
    ///
    /// Rows are found by rounding the endpoints to the nearest pixel center
    /// boundary. The edge may be empty (`top == bottom`); see [Edge::is_empty]
    pub fn new(p0: Point, p1: Point, winding: i32) -> Self {
        let m = (p1.x - p0.x) / (p1.y - p0.y);
        let b = p0.x - m * p0.y;
        let y0 = round_to_int(p0.y);
        let y1 = round_to_int(p1.y);
        Self { m, b, top: y0.min(y1), bottom: y0.max(y1), winding }
    }
    /// Vertical edge at `x` covering rows `top .. bottom`
    pub fn vertical(x: f32, top: i32, bottom: i32, winding: i32) -> Self {
        Self { m: 0.0, b: x, top, bottom, winding }
    }
    /// x position of the edge at y
    pub fn x(&self, y: f32) -> f32 {
        self.m * y + self.b
    }
    /// y position of the edge at x
    pub fn y(&self, x: f32) -> f32 {
        (x - self.b) / self.m
    }
    /// Replace the edge with a vertical line at x, keeping its rows
    pub fn project_to(&mut self, x: f32) {
        self.m = 0.0;
        self.b = x;
    }
    /// Does the edge cross the center of row y
    pub fn is_valid(&self, y: i32) -> bool {
        y >= self.top && y < self.bottom
    }
    /// Edge covers no rows
    pub fn is_empty(&self) -> bool {
        self.top >= self.bottom
    }
}

/// Edges sort by top row, then bottom row
pub fn compare(a: &Edge, b: &Edge) -> Ordering {
    a.top.cmp(&b.top).then(a.bottom.cmp(&b.bottom))
}

/// Sort edges for the scanline sweep
///
/// The sort is stable, edges with equal rows keep insertion order
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(compare);
}
