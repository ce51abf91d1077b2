//! Per triangle shaders used by mesh drawing
//!
//! A triangle `p0 p1 p2` defines a basis `U = p1 - p0`, `V = p2 - p0`.
//! Mapping a device point back through that basis gives barycentric-like
//! coordinates `(u, v)` used to blend vertex colors or to look up texture
//! coordinates.

use crate::color::{Color, Pixel};
use crate::point::Point;
use crate::shader::start_and_step;
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

/// Matrix mapping (1,0) to `p1`, (0,1) to `p2` and the origin to `p0`
pub fn triangle_basis(p0: Point, p1: Point, p2: Point) -> Transform {
    let u = p1 - p0;
    let v = p2 - p0;
    Transform::from_rows(u.x, v.x, p0.x,
                         u.y, v.y, p0.y)
}

/// Linear interpolation of three vertex colors
#[derive(Debug)]
pub struct TriColorShader {
    local: Transform,
    colors: [Color; 3],
    inverse: Cell<Transform>,
}

impl TriColorShader {
    pub fn new(pts: [Point; 3], colors: [Color; 3]) -> Self {
        Self { local: triangle_basis(pts[0], pts[1], pts[2]), colors,
               inverse: Cell::new(Transform::new()) }
    }
}

impl Shader for TriColorShader {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.a >= 1.0)
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        match (*ctm * self.local).invert() {
            Some(inv) => {
                self.inverse.set(inv);
                true
            },
            None => false,
        }
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let (p, step) = start_and_step(&self.inverse.get(), x, y);
        let dc1 = self.colors[1] - self.colors[0];
        let dc2 = self.colors[2] - self.colors[0];
        let dc = dc1 * step.x + dc2 * step.y;
        let mut c = dc1 * p.x + dc2 * p.y + self.colors[0];
        for px in row.iter_mut() {
            *px = c.premul();
            c = c + dc;
        }
    }
}

/// Another shader sampled through a triangle's texture coordinates
///
/// The wrapped shader is expressed in texture space; the local matrix maps
/// texture space onto the triangle.
pub struct TexShader<'a> {
    local: Transform,
    shader: &'a dyn Shader,
}

impl<'a> TexShader<'a> {
    /// None when the texture coordinates are collinear
    pub fn new(pts: [Point; 3], texs: [Point; 3], shader: &'a dyn Shader) -> Option<Self> {
        let tex = triangle_basis(texs[0], texs[1], texs[2]).invert()?;
        let local = triangle_basis(pts[0], pts[1], pts[2]) * tex;
        Some(Self { local, shader })
    }
}

impl<'a> Shader for TexShader<'a> {
    fn is_opaque(&self) -> bool {
        self.shader.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.shader.set_context(&(*ctm * self.local))
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        self.shader.shade_row(x, y, row)
    }
}

/// Product of a color shader and a texture shader
pub struct TexColorShader<'a> {
    color: &'a dyn Shader,
    tex: &'a dyn Shader,
}

impl<'a> TexColorShader<'a> {
    pub fn new(color: &'a dyn Shader, tex: &'a dyn Shader) -> Self {
        Self { color, tex }
    }
}

fn modulate(a: u8, b: u8) -> u8 {
    (u32::from(a) * u32::from(b) / 255) as u8
}

impl<'a> Shader for TexColorShader<'a> {
    fn is_opaque(&self) -> bool {
        self.color.is_opaque() && self.tex.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.color.set_context(ctm) && self.tex.set_context(ctm)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let mut trow = vec![Pixel(0); row.len()];
        self.color.shade_row(x, y, row);
        self.tex.shade_row(x, y, &mut trow);
        for (c, t) in row.iter_mut().zip(trow.iter()) {
            *c = Pixel::pack_argb(modulate(c.a(), t.a()), modulate(c.r(), t.r()),
                                  modulate(c.g(), t.g()), modulate(c.b(), t.b()));
        }
    }
}
