//! Clipping Region

use crate::edge::Edge;
use crate::point::Point;

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}

/// Floating point rectangle, as used for geometry
pub type Rect = Rectangle<f32>;

impl<T> Rectangle<T> where T: std::cmp::PartialOrd + Copy {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Expand if the rectangle is outside
    pub fn expand_rect(&mut self, r: &Rectangle<T>) {
        self.expand(r.x1, r.y1);
        self.expand(r.x2, r.y2);
    }
}

impl Rectangle<f32> {
    /// Rectangle from left, top, right, bottom; values are kept as given
    pub fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { x1: left, y1: top, x2: right, y2: bottom }
    }
    /// Rectangle from an origin and a size
    pub fn xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::ltrb(x, y, x + w, y + h)
    }
    /// Rectangle at the origin with a size
    pub fn wh(w: f32, h: f32) -> Self {
        Self::ltrb(0.0, 0.0, w, h)
    }
    pub fn left(&self) -> f32 { self.x1 }
    pub fn top(&self) -> f32 { self.y1 }
    pub fn right(&self) -> f32 { self.x2 }
    pub fn bottom(&self) -> f32 { self.y2 }
    pub fn width(&self) -> f32 { self.x2 - self.x1 }
    pub fn height(&self) -> f32 { self.y2 - self.y1 }
    /// Corners in clockwise order starting at the top left
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.x1, self.y1),
         Point::new(self.x2, self.y1),
         Point::new(self.x2, self.y2),
         Point::new(self.x1, self.y2)]
    }
}

/// Clip Region
///
/// Converts line segments into [Edge]s clipped to `0 .. width` and
/// `0 .. height`. Parts of a segment left or right of the region are
/// replaced by vertical edges on the boundary so winding is preserved.
#[derive(Debug,Copy,Clone)]
pub struct Clip {
    /// Rectangle to clip on
    clip_box: Rectangle<i32>,
}

impl Clip {
    /// Create new Clipping region for a device of `width` x `height`
    pub fn new(width: i32, height: i32) -> Self {
        Self { clip_box: Rectangle::new(0, 0, width, height) }
    }
    /// Region being clipped to
    pub fn clip_box(&self) -> Rectangle<i32> {
        self.clip_box
    }
    /// Clip the segment from `p0` to `p1`, pushing zero or more edges
    pub fn line(&self, edges: &mut Vec<Edge>, mut p0: Point, mut p1: Point) {
        let b = &self.clip_box;
        let (left, top) = (b.x1 as f32, b.y1 as f32);
        let (right, bottom) = (b.x2 as f32, b.y2 as f32);

        let winding = if p0.y < p1.y { 1 } else { -1 };
        let mut edge = Edge::new(p0, p1, winding);
        if edge.is_empty() {
            log::trace!("CLIP: horizontal {:?} -> {:?}", p0, p1);
            return;
        }

        // top and bottom
        if p0.y > p1.y {
            std::mem::swap(&mut p0, &mut p1);
        }
        if p1.y < top || p0.y > bottom {
            return;
        }
        if edge.top < b.y1 {
            edge.top = b.y1;
            p0 = Point::new(edge.x(top), top);
        }
        if edge.bottom > b.y2 {
            edge.bottom = b.y2;
            p1 = Point::new(edge.x(bottom), bottom);
        }
        if edge.is_empty() {
            return;
        }

        // left and right
        if p0.x > p1.x {
            std::mem::swap(&mut p0, &mut p1);
        }
        if p1.x < left {
            edge.project_to(left);
            edges.push(edge);
            return;
        } else if p0.x >= right {
            edge.project_to(right);
            edges.push(edge);
            return;
        }

        if p0.x < left {
            let projected = Edge::new(Point::new(left, edge.y(left)),
                                      Point::new(left, p0.y), winding);
            if edge.m < 0.0 {
                edge.bottom = projected.top;
            } else {
                edge.top = projected.bottom;
            }
            push_nonempty(edges, projected);
        }
        if p1.x > right {
            let projected = Edge::new(Point::new(right, edge.y(right)),
                                      Point::new(right, p1.y), winding);
            if edge.m > 0.0 {
                edge.bottom = projected.top;
            } else {
                edge.top = projected.bottom;
            }
            push_nonempty(edges, projected);
        }
        push_nonempty(edges, edge);
    }
}

fn push_nonempty(edges: &mut Vec<Edge>, edge: Edge) {
    if !edge.is_empty() {
        edges.push(edge);
    }
}
