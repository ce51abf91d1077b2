//! Points and Vectors

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Point or Vector in device or local space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Vectors share a representation with Points
pub type Vector = Point;

impl Point {
    /// Create a new Point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    /// Length of the vector from the origin
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    /// Affine combination `(1-t)*self + t*other`
    pub fn lerp(self, other: Point, t: f32) -> Point {
        self * (1.0 - t) + other * t
    }
}

impl From<(f32,f32)> for Point {
    fn from(p: (f32, f32)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, s: f32) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}
impl Mul<Point> for f32 {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        Point::new(p.x * self, p.y * self)
    }
}
impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
