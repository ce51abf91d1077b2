//! Bezier curve evaluation, extrema and flattening

use crate::point::Point;

/// Evaluate one axis of a quadratic Bezier at t
pub fn quad_at(a: f32, b: f32, c: f32, t: f32) -> f32 {
    let tt = 1.0 - t;
    a * tt * tt + 2.0 * b * tt * t + c * t * t
}

/// Evaluate one axis of a cubic Bezier at t
pub fn cubic_at(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let tt = 1.0 - t;
    a * tt * tt * tt + 3.0 * b * t * tt * tt + 3.0 * c * t * t * tt + d * t * t * t
}

/// Parameter where the derivative of a quadratic is zero
///
/// None when the derivative is constant
pub fn solve_quad_extremum(a: f32, b: f32, c: f32) -> Option<f32> {
    let denom = a + c - 2.0 * b;
    if denom == 0.0 {
        return None;
    }
    Some((a - b) / denom)
}

/// Parameters where the derivative of a cubic is zero
///
/// Up to two real roots of the derivative's quadratic, unfiltered
pub fn solve_cubic_extrema(a: f32, b: f32, c: f32, d: f32) -> Vec<f32> {
    let qa = 3.0 * d - 3.0 * a + 9.0 * b - 9.0 * c;
    let qb = 6.0 * a - 12.0 * b + 6.0 * c;
    let qc = -3.0 * a + 3.0 * b;

    let mut roots = Vec::with_capacity(2);
    if qa == 0.0 {
        if qb != 0.0 {
            roots.push(-qc / qb);
        }
        return roots;
    }
    let disc = qb * qb - 4.0 * qa * qc;
    if disc == 0.0 {
        roots.push(-qb / (2.0 * qa));
    } else if disc > 0.0 {
        let s = disc.sqrt();
        roots.push((-qb + s) / (2.0 * qa));
        roots.push((-qb - s) / (2.0 * qa));
    }
    roots
}

/// Number of line segments used to approximate a quadratic
pub fn quad_segments(pts: &[Point; 3]) -> usize {
    let e = pts[0] * 0.25 - pts[1] * 0.5 + pts[2] * 0.25;
    segment_count(4.0 * e.length())
}

/// Number of line segments used to approximate a cubic
pub fn cubic_segments(pts: &[Point; 4]) -> usize {
    let e0 = pts[0] - pts[1] * 2.0 + pts[2];
    let e1 = pts[1] - pts[2] * 2.0 + pts[3];
    let e = Point::new(e0.x.abs().max(e1.x.abs()),
                       e0.y.abs().max(e1.y.abs()));
    segment_count(3.0 * e.length())
}

/// Upper bound on the segments of one curve
pub const MAX_SEGMENTS: usize = 1024;

fn segment_count(err: f32) -> usize {
    let n = err.sqrt().ceil();
    if n.is_nan() || n < 1.0 {
        1
    } else if n >= MAX_SEGMENTS as f32 {
        MAX_SEGMENTS
    } else {
        n as usize
    }
}

/// Approximate a quadratic with line segments
///
/// Returned points start at `pts[0]` and always end exactly at `pts[2]`
pub fn flatten_quad(pts: &[Point; 3]) -> Vec<Point> {
    let n = quad_segments(pts);
    let step = 1.0 / n as f32;
    let mut out = Vec::with_capacity(n + 1);
    let (mut t, mut tt) = (0.0f32, 1.0f32);
    for _ in 0 .. n {
        out.push(pts[0] * (tt * tt) + pts[1] * (2.0 * t * tt) + pts[2] * (t * t));
        t += step;
        tt -= step;
    }
    out.push(pts[2]);
    out
}

/// Approximate a cubic with line segments
///
/// Returned points start at `pts[0]` and always end exactly at `pts[3]`
pub fn flatten_cubic(pts: &[Point; 4]) -> Vec<Point> {
    let n = cubic_segments(pts);
    let step = 1.0 / n as f32;
    let mut out = Vec::with_capacity(n + 1);
    let (mut t, mut tt) = (0.0f32, 1.0f32);
    for _ in 0 .. n {
        out.push(pts[0] * (tt * tt * tt) +
                 pts[1] * (3.0 * tt * tt * t) +
                 pts[2] * (3.0 * tt * t * t) +
                 pts[3] * (t * t * t));
        t += step;
        tt -= step;
    }
    out.push(pts[3]);
    out
}

/// Split a quadratic at t using de Casteljau's algorithm
///
/// The two halves are `[0,1,2]` and `[2,3,4]`
pub fn chop_quad_at(src: &[Point; 3], t: f32) -> [Point; 5] {
    let ab = src[0].lerp(src[1], t);
    let bc = src[1].lerp(src[2], t);
    let p = ab.lerp(bc, t);
    [src[0], ab, p, bc, src[2]]
}

/// Split a cubic at t using de Casteljau's algorithm
///
/// The two halves are `[0,1,2,3]` and `[3,4,5,6]`
pub fn chop_cubic_at(src: &[Point; 4], t: f32) -> [Point; 7] {
    let ab = src[0].lerp(src[1], t);
    let bc = src[1].lerp(src[2], t);
    let cd = src[2].lerp(src[3], t);
    let p1 = ab.lerp(bc, t);
    let p2 = bc.lerp(cd, t);
    let pm = p1.lerp(p2, t);
    [src[0], ab, p1, pm, p2, cd, src[3]]
}
