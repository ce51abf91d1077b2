//! Rasterizer
//!
//! Collects clipped [Edge]s for a shape and sweeps them into [Span]s.
//! Convex shapes use a two edge walk, everything else the nonzero winding
//! rule through a [Scanline].

use crate::clip::Clip;
use crate::curve;
use crate::edge::{self, Edge};
use crate::math::round_to_int;
use crate::path_storage::{Path, PathCommand};
use crate::point::Point;
use crate::scan::{Scanline, Span};

#[derive(Debug)]
pub struct Rasterizer {
    pub clipper: Clip,
    edges: Vec<Edge>,
}

impl Rasterizer {
    /// Rasterizer for a device of `width` x `height` pixels
    pub fn new(width: i32, height: i32) -> Self {
        Self { clipper: Clip::new(width, height), edges: vec![] }
    }
    /// Remove all edges
    pub fn reset(&mut self) {
        self.edges.clear();
    }
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    /// Add a device space line segment
    pub fn add_line(&mut self, p0: Point, p1: Point) {
        self.clipper.line(&mut self.edges, p0, p1);
    }
    /// Add a closed polygon, the last point connects back to the first
    pub fn add_polygon(&mut self, pts: &[Point]) {
        let n = pts.len();
        for i in 0 .. n {
            self.add_line(pts[i], pts[(i + 1) % n]);
        }
    }
    /// Add the closed contours of a device space path
    ///
    /// Curves are flattened into lines first
    pub fn add_path(&mut self, path: &Path) {
        for seg in path.edges() {
            let p = seg.pts;
            match seg.cmd {
                PathCommand::MoveTo => {},
                PathCommand::LineTo => self.add_line(p[0], p[1]),
                PathCommand::QuadTo => {
                    let pts = curve::flatten_quad(&[p[0], p[1], p[2]]);
                    self.add_chain(&pts);
                },
                PathCommand::CubicTo => {
                    let pts = curve::flatten_cubic(&[p[0], p[1], p[2], p[3]]);
                    self.add_chain(&pts);
                },
            }
        }
    }
    fn add_chain(&mut self, pts: &[Point]) {
        for w in pts.windows(2) {
            self.add_line(w[0], w[1]);
        }
    }
    /// Sort edges by top, then bottom row
    pub fn sort(&mut self) {
        edge::sort_edges(&mut self.edges);
    }
    /// Rows covered by the edges, `top .. bottom`
    pub fn rows(&self) -> Option<(i32, i32)> {
        let top = self.edges.iter().map(|e| e.top).min()?;
        let bottom = self.edges.iter().map(|e| e.bottom).max()?;
        Some((top, bottom))
    }
    /// Spans of a convex shape
    ///
    /// Every row crosses exactly two edges; edges are consumed in sorted
    /// order as the rows pass their bottom. Edges must be sorted.
    pub fn sweep_convex(&self) -> Vec<Span> {
        let edges = &self.edges;
        let mut spans = vec![];
        if edges.len() < 2 {
            return spans;
        }
        let (top, bottom) = match self.rows() {
            Some(rows) => rows,
            None => return spans,
        };
        let (mut left, mut right, mut next) = (0, 1, 2);
        for y in top .. bottom {
            while edges[left].bottom <= y && next < edges.len() {
                left = next;
                next += 1;
            }
            while edges[right].bottom <= y && next < edges.len() {
                right = next;
                next += 1;
            }
            if !edges[left].is_valid(y) || !edges[right].is_valid(y) {
                continue;
            }
            let yc = y as f32 + 0.5;
            let mut x0 = round_to_int(edges[left].x(yc));
            let mut x1 = round_to_int(edges[right].x(yc));
            if x0 > x1 {
                std::mem::swap(&mut x0, &mut x1);
            }
            if x1 > x0 {
                spans.push(Span::new(x0, y, x1 - x0));
            }
        }
        spans
    }
    /// Spans of an arbitrary shape under the nonzero winding rule
    ///
    /// Edges must be sorted.
    pub fn sweep_nonzero(&self) -> Vec<Span> {
        let mut spans = vec![];
        let (top, bottom) = match self.rows() {
            Some(rows) => rows,
            None => return spans,
        };
        let mut sl = Scanline::new();
        for y in top .. bottom {
            sl.reset(y);
            let yc = y as f32 + 0.5;
            for e in self.edges.iter().take_while(|e| e.top <= y) {
                if e.is_valid(y) {
                    sl.add_crossing(round_to_int(e.x(yc)), e.winding);
                }
            }
            sl.sweep_nonzero();
            spans.extend_from_slice(&sl.spans);
        }
        spans
    }
}
