//! Transformations

use crate::point::Point;

use std::ops::Mul;

/// Affine Transformation
///
/// Maps a point by
///
/// ```text
/// x' = sx  * x + shx * y + tx
/// y' = shy * x + sy  * y + ty
/// ```
///
/// The bottom row is implicitly `[0, 0, 1]`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub shy: f32,
    pub shx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Create a Transform from its two rows
    ///
    /// `(sx, shx, tx)` is the row producing x', `(shy, sy, ty)` the row producing y'
    pub fn from_rows(sx: f32, shx: f32, tx: f32, shy: f32, sy: f32, ty: f32) -> Self {
        Self { sx, shy, shx, sy, tx, ty }
    }
    /// Create a translation
    pub fn new_translate(tx: f32, ty: f32) -> Self {
        Self::from_rows(1.0, 0.0, tx,
                        0.0, 1.0, ty)
    }
    /// Create a scaling
    pub fn new_scale(sx: f32, sy: f32) -> Self {
        Self::from_rows(sx, 0.0, 0.0,
                        0.0, sy, 0.0)
    }
    /// Create a rotation
    ///
    /// angle is in radians
    pub fn new_rotate(angle: f32) -> Self {
        let ca = f64::from(angle).cos() as f32;
        let sa = f64::from(angle).sin() as f32;
        Self::from_rows(ca, -sa, 0.0,
                        sa,  ca, 0.0)
    }
    /// Compose two transforms, `b` is applied first, then `a`
    pub fn concat(a: &Transform, b: &Transform) -> Self {
        let sx  = a.sx  * b.sx  + a.shx * b.shy;
        let shy = a.shy * b.sx  + a.sy  * b.shy;
        let shx = a.sx  * b.shx + a.shx * b.sy;
        let sy  = a.shy * b.shx + a.sy  * b.sy;
        let tx  = a.sx  * b.tx  + a.shx * b.ty + a.tx;
        let ty  = a.shy * b.tx  + a.sy  * b.ty + a.ty;
        Self { sx, shy, shx, sy, tx, ty }
    }
    fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Inverse of the transform
    ///
    /// Returns None if the determinant is exactly zero
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let d = 1.0 / det;
        Some(Self {
            sx:   self.sy * d,
            shy: -self.shy * d,
            shx: -self.shx * d,
            sy:   self.sx * d,
            tx:  (self.shx * self.ty - self.sy * self.tx) * d,
            ty:  (self.shy * self.tx - self.sx * self.ty) * d,
        })
    }
    /// True when there is no rotation or skew
    pub fn is_scale_translate(&self) -> bool {
        self.shx == 0.0 && self.shy == 0.0
    }
    /// Perform the transform
    pub fn transform(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform a single point
    pub fn map_point(&self, p: Point) -> Point {
        let (x, y) = self.transform(p.x, p.y);
        Point::new(x, y)
    }
    /// Transform `src` into `dst`, pairing elements by index
    ///
    /// Only `min(dst.len(), src.len())` points are written
    pub fn map_points(&self, dst: &mut [Point], src: &[Point]) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = self.map_point(*s);
        }
    }
    /// Transform points in place
    pub fn map_points_in_place(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        Transform::concat(&self, &rhs)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        self.map_point(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn near(a: f32, b: f32) -> bool {
        (a - b).abs() <= 0.00001
    }
    fn is_eq(m: &Transform, sx: f32, shx: f32, tx: f32, shy: f32, sy: f32, ty: f32) -> bool {
        near(m.sx, sx) && near(m.shx, shx) && near(m.tx, tx) &&
            near(m.shy, shy) && near(m.sy, sy) && near(m.ty, ty)
    }

    #[test]
    fn factories() {
        assert!(is_eq(&Transform::new(), 1., 0., 0., 0., 1., 0.));
        assert!(is_eq(&Transform::new_translate(2.5, -4.), 1., 0., 2.5, 0., 1., -4.));
        assert!(is_eq(&Transform::new_scale(2.5, -4.), 2.5, 0., 0., 0., -4., 0.));
        assert!(is_eq(&Transform::new_rotate(PI/2.), 0., -1., 0., 1., 0., 0.));
        assert!(is_eq(&Transform::new_rotate(PI), -1., 0., 0., 0., -1., 0.));
        let r2 = 2.0f32.sqrt() / 2.0;
        assert!(is_eq(&Transform::new_rotate(PI/4.), r2, -r2, 0., r2, r2, 0.));
    }

    #[test]
    fn concat_order() {
        let m = Transform::new_scale(2., 3.) * Transform::new_scale(-1., -2.);
        assert!(is_eq(&m, -2., 0., 0., 0., -6., 0.));
        let m = Transform::new_translate(5., 6.) * Transform::new_scale(2., 3.);
        assert!(is_eq(&m, 2., 0., 5., 0., 3., 6.));
        // Scale is applied first, so the translation is not scaled
        assert_eq!(m.map_point(Point::new(1., 1.)), Point::new(7., 9.));
    }

    #[test]
    fn invert() {
        let m = Transform::new();
        assert_eq!(m.invert(), Some(m));

        let m = Transform::new_scale(0.5, 4.).invert().unwrap();
        assert!(is_eq(&m, 2., 0., 0., 0., 0.25, 0.));

        let m = Transform::new_translate(3., 4.) * Transform::new_rotate(PI/3.);
        let inv = m.invert().unwrap();
        assert!(is_eq(&(m * inv), 1., 0., 0., 0., 1., 0.));

        assert_eq!(Transform::new_scale(0., 1.).invert(), None);
        assert_eq!(Transform::from_rows(1., 2., 0., 2., 4., 0.).invert(), None);
    }

    #[test]
    fn map_points() {
        let src = [Point::new(0., 0.), Point::new(1., 1.),
                   Point::new(-3., 4.), Point::new(0.5, -0.125)];
        let mut dst = [Point::default(); 4];
        let m = Transform::new_translate(3., 4.) * Transform::new_scale(2., 2.);
        m.map_points(&mut dst, &src);
        assert_eq!(dst, [Point::new(3., 4.), Point::new(5., 6.),
                         Point::new(-3., 12.), Point::new(4., 3.75)]);

        let m = Transform::new_translate(3., 4.) * Transform::new_rotate(PI/3.);
        m.map_points(&mut dst, &src);
        let mut inplace = src;
        m.map_points_in_place(&mut inplace);
        assert_eq!(dst, inplace);
    }
}
