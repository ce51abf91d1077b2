//! Path Storage
//!
//! A [Path] is an ordered list of [PathCommand]s paired with a flat point
//! buffer. Each contour starts with a single `MoveTo`; the following
//! commands use the previous end point as their first control point.
//!
//!     use softcanvas::{Path, PathCommand, Point};
//!
//!     let mut path = Path::new();
//!     path.move_to(10.0, 20.0);
//!     path.line_to(30.0, 0.0);
//!
//!     let cmds: Vec<_> = path.iter().map(|s| s.cmd).collect();
//!     assert_eq!(cmds, vec![PathCommand::MoveTo, PathCommand::LineTo]);
//!
//!     // Edges close the contour back to its start
//!     let edges: Vec<_> = path.edges().collect();
//!     assert_eq!(edges.len(), 2);
//!     assert_eq!(edges[1].points(), &[Point::new(30.0, 0.0), Point::new(10.0, 20.0)]);

use crate::clip::Rect;
use crate::curve;
use crate::point::Point;
use crate::transform::Transform;

/// Path building commands, or verbs
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
}

impl PathCommand {
    /// Points appended to storage by this command
    pub fn new_points(self) -> usize {
        match self {
            PathCommand::MoveTo  => 1,
            PathCommand::LineTo  => 1,
            PathCommand::QuadTo  => 2,
            PathCommand::CubicTo => 3,
        }
    }
    /// Points needed to describe the segment, including the previous end point
    pub fn segment_points(self) -> usize {
        match self {
            PathCommand::MoveTo => 1,
            cmd => cmd.new_points() + 1,
        }
    }
}

/// Direction a closed shape is traced in
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise
}

/// Single command with its defining points
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Segment {
    pub cmd: PathCommand,
    /// Only the first `cmd.segment_points()` values are meaningful
    pub pts: [Point; 4],
}

impl Segment {
    fn new(cmd: PathCommand, src: &[Point]) -> Self {
        let mut pts = [Point::default(); 4];
        pts[..src.len()].copy_from_slice(src);
        Self { cmd, pts }
    }
    fn line(p0: Point, p1: Point) -> Self {
        Self::new(PathCommand::LineTo, &[p0, p1])
    }
    /// Points defining this segment
    pub fn points(&self) -> &[Point] {
        &self.pts[.. self.cmd.segment_points()]
    }
}

#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    verbs: Vec<PathCommand>,
    pts: Vec<Point>,
}

/// Control point offset for approximating a quarter circle with a cubic
const CIRCLE_KAPPA: f32 = 0.551915;

impl Path {
    pub fn new() -> Self {
        Self { verbs: vec![], pts: vec![] }
    }
    /// Remove all commands and points
    pub fn reset(&mut self) {
        self.verbs.clear();
        self.pts.clear();
    }
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
    pub fn count_points(&self) -> usize {
        self.pts.len()
    }
    pub fn verbs(&self) -> &[PathCommand] {
        &self.verbs
    }
    pub fn points(&self) -> &[Point] {
        &self.pts
    }
    /// Start a new contour at (x,y)
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.verbs.push(PathCommand::MoveTo);
        self.pts.push(Point::new(x, y));
    }
    /// A contour must be open before drawing commands are appended;
    /// if the path is empty one is started at the origin
    fn inject_move_to(&mut self) {
        if self.verbs.is_empty() {
            log::debug!("PATH: drawing command without move_to, starting at origin");
            self.move_to(0.0, 0.0);
        }
    }
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.inject_move_to();
        self.verbs.push(PathCommand::LineTo);
        self.pts.push(Point::new(x, y));
    }
    pub fn quad_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.inject_move_to();
        self.verbs.push(PathCommand::QuadTo);
        self.pts.push(Point::new(x1, y1));
        self.pts.push(Point::new(x2, y2));
    }
    pub fn cubic_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.inject_move_to();
        self.verbs.push(PathCommand::CubicTo);
        self.pts.push(Point::new(x1, y1));
        self.pts.push(Point::new(x2, y2));
        self.pts.push(Point::new(x3, y3));
    }
    pub fn move_to_pt(&mut self, p: Point) {
        self.move_to(p.x, p.y);
    }
    pub fn line_to_pt(&mut self, p: Point) {
        self.line_to(p.x, p.y);
    }
    pub fn quad_to_pt(&mut self, p1: Point, p2: Point) {
        self.quad_to(p1.x, p1.y, p2.x, p2.y);
    }
    pub fn cubic_to_pt(&mut self, p1: Point, p2: Point, p3: Point) {
        self.cubic_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
    }
    /// Append a rectangle as a new contour
    ///
    /// The contour always starts at the top left corner
    pub fn add_rect(&mut self, r: &Rect, dir: PathOrientation) {
        self.move_to(r.left(), r.top());
        match dir {
            PathOrientation::Clockwise => {
                self.line_to(r.right(), r.top());
                self.line_to(r.right(), r.bottom());
                self.line_to(r.left(), r.bottom());
            },
            PathOrientation::CounterClockwise => {
                self.line_to(r.left(), r.bottom());
                self.line_to(r.right(), r.bottom());
                self.line_to(r.right(), r.top());
            },
        }
    }
    /// Append a polygon as a new contour
    ///
    /// The contour is not closed explicitly; [Edger] closes it
    pub fn add_polygon(&mut self, pts: &[Point]) {
        if let Some((first, rest)) = pts.split_first() {
            self.move_to_pt(*first);
            for p in rest {
                self.line_to_pt(*p);
            }
        }
    }
    /// Append a circle built from four cubic quadrants
    ///
    /// The contour starts at the rightmost point of the circle
    pub fn add_circle(&mut self, center: Point, radius: f32, dir: PathOrientation) {
        let a = CIRCLE_KAPPA;
        let unit = [
            Point::new( 1., 0.), Point::new( 1., a), Point::new( a, 1.),
            Point::new( 0., 1.), Point::new(-a, 1.), Point::new(-1., a),
            Point::new(-1., 0.), Point::new(-1.,-a), Point::new(-a,-1.),
            Point::new( 0.,-1.), Point::new( a,-1.), Point::new( 1.,-a),
            Point::new( 1., 0.),
        ];
        let map = |i: usize| center + unit[i] * radius;

        self.move_to_pt(map(0));
        match dir {
            PathOrientation::Clockwise => {
                for i in 0 .. 4 {
                    self.cubic_to_pt(map(3*i+1), map(3*i+2), map(3*i+3));
                }
            },
            PathOrientation::CounterClockwise => {
                for i in (0 .. 4).rev() {
                    self.cubic_to_pt(map(3*i+2), map(3*i+1), map(3*i));
                }
            },
        }
    }
    /// Tight bounds of the path, including curve extrema
    ///
    /// An empty path has all-zero bounds
    pub fn bounds(&self) -> Rect {
        let first = match self.pts.first() {
            None => return Rect::ltrb(0.0, 0.0, 0.0, 0.0),
            Some(p) => *p,
        };
        let mut r = Rect::ltrb(first.x, first.y, first.x, first.y);
        for seg in self.iter() {
            let p = seg.points();
            let end = p[p.len() - 1];
            r.expand(end.x, end.y);
            match seg.cmd {
                PathCommand::MoveTo | PathCommand::LineTo => {},
                PathCommand::QuadTo => {
                    let tx = curve::solve_quad_extremum(p[0].x, p[1].x, p[2].x);
                    if let Some(t) = tx.filter(|t| *t > 0.0 && *t < 1.0) {
                        r.expand(curve::quad_at(p[0].x, p[1].x, p[2].x, t), end.y);
                    }
                    let ty = curve::solve_quad_extremum(p[0].y, p[1].y, p[2].y);
                    if let Some(t) = ty.filter(|t| *t > 0.0 && *t < 1.0) {
                        r.expand(end.x, curve::quad_at(p[0].y, p[1].y, p[2].y, t));
                    }
                },
                PathCommand::CubicTo => {
                    for t in curve::solve_cubic_extrema(p[0].x, p[1].x, p[2].x, p[3].x) {
                        if t > 0.0 && t < 1.0 {
                            r.expand(curve::cubic_at(p[0].x, p[1].x, p[2].x, p[3].x, t), end.y);
                        }
                    }
                    for t in curve::solve_cubic_extrema(p[0].y, p[1].y, p[2].y, p[3].y) {
                        if t > 0.0 && t < 1.0 {
                            r.expand(end.x, curve::cubic_at(p[0].y, p[1].y, p[2].y, p[3].y, t));
                        }
                    }
                },
            }
        }
        r
    }
    /// Apply a transform to every stored point
    pub fn transform(&mut self, m: &Transform) {
        m.map_points_in_place(&mut self.pts);
    }
    /// Move every point by (dx, dy)
    pub fn offset(&mut self, dx: f32, dy: f32) {
        self.transform(&Transform::new_translate(dx, dy));
    }
    /// Iterate over every command in storage order
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
    /// Iterate over fillable edges, closing each contour
    pub fn edges(&self) -> Edger<'_> {
        Edger::new(self)
    }
}

/// Split a quadratic at t; see [curve::chop_quad_at]
pub fn chop_quad_at(src: &[Point; 3], t: f32) -> [Point; 5] {
    curve::chop_quad_at(src, t)
}

/// Split a cubic at t; see [curve::chop_cubic_at]
pub fn chop_cubic_at(src: &[Point; 4], t: f32) -> [Point; 7] {
    curve::chop_cubic_at(src, t)
}

/// Iterator over all commands of a [Path]
///
/// `MoveTo` yields one point, `LineTo` two, `QuadTo` three and `CubicTo` four
#[derive(Debug,Clone)]
pub struct Iter<'a> {
    path: &'a Path,
    verb: usize,
    pt: usize,
}

impl<'a> Iter<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path, verb: 0, pt: 0 }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        let cmd = *self.path.verbs.get(self.verb)?;
        self.verb += 1;
        let seg = match cmd {
            PathCommand::MoveTo => {
                Segment::new(cmd, &self.path.pts[self.pt .. self.pt + 1])
            },
            _ => {
                let n = cmd.new_points();
                Segment::new(cmd, &self.path.pts[self.pt - 1 .. self.pt + n])
            },
        };
        self.pt += cmd.new_points();
        Some(seg)
    }
}

/// Iterator over the fillable edges of a [Path]
///
/// `MoveTo` is skipped. When a contour ends, at the next `MoveTo` or at the
/// end of the path, a `LineTo` back to the contour start is produced unless
/// the contour already ends there.
#[derive(Debug,Clone)]
pub struct Edger<'a> {
    iter: std::iter::Peekable<Iter<'a>>,
    start: Point,
    last: Point,
}

impl<'a> Edger<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { iter: path.iter().peekable(),
               start: Point::default(),
               last: Point::default(),
        }
    }
    fn close(&mut self) -> Option<Segment> {
        if self.last != self.start {
            let seg = Segment::line(self.last, self.start);
            self.last = self.start;
            Some(seg)
        } else {
            None
        }
    }
}

impl<'a> Iterator for Edger<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        loop {
            let cmd = match self.iter.peek() {
                None => return self.close(),
                Some(seg) => seg.cmd,
            };
            if cmd == PathCommand::MoveTo {
                if let Some(seg) = self.close() {
                    return Some(seg);
                }
                let seg = self.iter.next()?;
                self.start = seg.pts[0];
                self.last = seg.pts[0];
                continue;
            }
            let seg = self.iter.next()?;
            let p = seg.points();
            self.last = p[p.len() - 1];
            return Some(seg);
        }
    }
}
