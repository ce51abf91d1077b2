//! Canvas
//!
//! Owns a [Bitmap] and a stack of transforms and turns draw calls into
//! blended spans.
//!
//!     use softcanvas::{Bitmap, Canvas, Color, Paint, Rect, Transform};
//!
//!     let mut canvas = Canvas::new(Bitmap::new(8, 8));
//!     canvas.clear(Color::white());
//!     canvas.save();
//!     canvas.concat(&Transform::new_translate(2.0, 2.0));
//!     canvas.draw_rect(&Rect::xywh(0.0, 0.0, 4.0, 4.0), &Paint::new(Color::black()));
//!     canvas.restore();
//!
//!     assert_eq!(canvas.bitmap()[(2, 2)].0, 0xFF00_0000);
//!     assert_eq!(canvas.bitmap()[(6, 6)].0, 0xFFFF_FFFF);

use crate::base::RenderingBase;
use crate::buffer::Bitmap;
use crate::clip::Rect;
use crate::color::Color;
use crate::math::round_to_int;
use crate::paint::{Blitter, Paint};
use crate::path_storage::Path;
use crate::point::Point;
use crate::raster::Rasterizer;
use crate::scan::Span;
use crate::transform::Transform;
use crate::triangle::{TexColorShader, TexShader, TriColorShader};
use crate::Shader;

#[derive(Debug)]
pub struct Canvas<'a> {
    base: RenderingBase<'a>,
    /// Transform stack, the last entry is current; never empty
    stack: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    /// Canvas drawing into `bitmap` with the identity transform
    pub fn new(bitmap: Bitmap<'a>) -> Self {
        Self { base: RenderingBase::new(bitmap), stack: vec![Transform::new()] }
    }
    pub fn bitmap(&self) -> &Bitmap<'a> {
        &self.base.bitmap
    }
    pub fn bitmap_mut(&mut self) -> &mut Bitmap<'a> {
        &mut self.base.bitmap
    }
    pub fn into_bitmap(self) -> Bitmap<'a> {
        self.base.bitmap
    }
    /// Current transform
    pub fn transform(&self) -> Transform {
        self.stack.last().copied().unwrap_or_default()
    }
    /// Push a copy of the current transform
    pub fn save(&mut self) {
        let ctm = self.transform();
        self.stack.push(ctm);
    }
    /// Pop the transform pushed by the matching [Canvas::save]
    pub fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            log::debug!(target: "canvas", "CANVAS: restore without save");
        }
    }
    /// Pre-multiply the current transform by `m`
    ///
    /// Geometry is transformed by `m` first, then by the previous transform
    pub fn concat(&mut self, m: &Transform) {
        let ctm = self.transform() * *m;
        if let Some(top) = self.stack.last_mut() {
            *top = ctm;
        }
    }
    /// Replace every pixel with `color`, ignoring blending
    pub fn clear(&mut self, color: Color) {
        log::debug!(target: "canvas", "CLEAR: {:?}", color);
        self.base.clear(color.premul());
    }
    fn blitter<'p>(&self, paint: &Paint<'p>) -> Option<Blitter<'p>> {
        paint.blitter(&self.transform())
    }
    /// Fill a rectangle
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        log::debug!(target: "canvas", "DRAW RECT: {:?} {:?}", rect, paint);
        let ctm = self.transform();
        if !ctm.is_scale_translate() {
            return self.fill_convex(&rect.corners(), paint);
        }
        let blitter = match self.blitter(paint) {
            Some(b) => b,
            None => return,
        };
        let p0 = ctm.map_point(Point::new(rect.left(), rect.top()));
        let p1 = ctm.map_point(Point::new(rect.right(), rect.bottom()));
        let (w, h) = (self.base.bitmap.width() as i32, self.base.bitmap.height() as i32);
        let clamp = |v: f32, hi: i32| round_to_int(v).max(0).min(hi);
        let (x0, x1) = (clamp(p0.x.min(p1.x), w), clamp(p0.x.max(p1.x), w));
        let (y0, y1) = (clamp(p0.y.min(p1.y), h), clamp(p0.y.max(p1.y), h));
        for y in y0 .. y1 {
            self.base.blend_span(&Span::new(x0, y, x1 - x0), &blitter);
        }
    }
    /// Fill a rectangle with a straight color
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.draw_rect(rect, &Paint::new(color));
    }
    /// Fill a convex polygon
    ///
    /// Fewer than three points draws nothing
    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &Paint) {
        log::debug!(target: "canvas", "DRAW CONVEX POLYGON: {} points {:?}", pts.len(), paint);
        self.fill_convex(pts, paint);
    }
    fn fill_convex(&mut self, pts: &[Point], paint: &Paint) {
        if pts.len() < 3 {
            return;
        }
        let blitter = match self.blitter(paint) {
            Some(b) => b,
            None => return,
        };
        let mut dev = pts.to_vec();
        self.transform().map_points_in_place(&mut dev);
        let mut ras = self.rasterizer();
        ras.add_polygon(&dev);
        ras.sort();
        let spans = ras.sweep_convex();
        self.base.blend_spans(&spans, &blitter);
    }
    /// Fill a path using the nonzero winding rule
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        log::debug!(target: "canvas", "DRAW PATH: {} points {:?}", path.count_points(), paint);
        let blitter = match self.blitter(paint) {
            Some(b) => b,
            None => return,
        };
        let mut dev = path.clone();
        dev.transform(&self.transform());
        let mut ras = self.rasterizer();
        ras.add_path(&dev);
        ras.sort();
        let spans = ras.sweep_nonzero();
        self.base.blend_spans(&spans, &blitter);
    }
    fn rasterizer(&self) -> Rasterizer {
        Rasterizer::new(self.base.bitmap.width() as i32, self.base.bitmap.height() as i32)
    }
    /// Fill `count` triangles
    ///
    /// Triangle `i` uses the vertices `indices[3i .. 3i+3]`. Per vertex
    /// `colors` are interpolated across each triangle; per vertex `texs`
    /// map the paint's shader onto it. With both, the two are multiplied.
    /// With neither, triangles are filled with `paint` as is. Triangles
    /// with out of range indices are skipped.
    pub fn draw_mesh(&mut self, verts: &[Point], colors: Option<&[Color]>, texs: Option<&[Point]>,
                     count: usize, indices: &[usize], paint: &Paint) {
        log::debug!(target: "canvas", "DRAW MESH: {} triangles", count);
        for i in 0 .. count {
            let tri = match indices.get(3 * i .. 3 * i + 3) {
                Some(t) => [t[0], t[1], t[2]],
                None => {
                    log::debug!(target: "canvas", "DRAW MESH: triangle {} has no indices", i);
                    break;
                },
            };
            let pts = match gather(verts, &tri) {
                Some(p) => p,
                None => {
                    log::debug!(target: "canvas", "DRAW MESH: triangle {} index out of range {:?}", i, tri);
                    continue;
                },
            };
            let cols = colors.and_then(|c| gather(c, &tri));
            let txs = texs.and_then(|t| gather(t, &tri));
            self.draw_triangle(pts, cols, txs, paint);
        }
    }
    fn draw_triangle(&mut self, pts: [Point; 3], colors: Option<[Color; 3]>,
                     texs: Option<[Point; 3]>, paint: &Paint) {
        let color = colors.map(|c| TriColorShader::new(pts, c));
        let tex = match (texs, paint.shader) {
            (Some(t), Some(sh)) => TexShader::new(pts, t, sh),
            _ => None,
        };
        let both;
        let shader: &dyn Shader = match (&color, &tex) {
            (Some(c), Some(t)) => {
                both = TexColorShader::new(c, t);
                &both
            },
            (Some(c), None) => c,
            (None, Some(t)) => t,
            (None, None) => {
                if texs.is_none() {
                    return self.fill_convex(&pts, paint);
                }
                if paint.shader.is_none() {
                    log::debug!(target: "canvas", "DRAW MESH: texture coordinates without a shader");
                    return;
                }
                log::debug!(target: "canvas", "DRAW MESH: collinear texture coordinates");
                return self.fill_convex(&pts, &Paint { shader: None, .. *paint });
            },
        };
        self.fill_convex(&pts, &paint.with_shader(shader));
    }
    /// Fill a quad by tessellating it into a mesh
    ///
    /// Corners are ordered top-left, top-right, bottom-right, bottom-left in
    /// patch space. The patch is split into `(level + 1)` rows and columns;
    /// positions, colors and texture coordinates are interpolated bilinearly.
    pub fn draw_quad(&mut self, verts: &[Point; 4], colors: Option<&[Color; 4]>,
                     texs: Option<&[Point; 4]>, level: usize, paint: &Paint) {
        log::debug!(target: "canvas", "DRAW QUAD: level {}", level);
        let n = level + 2;
        let step = 1.0 / (level + 1) as f32;
        let mut pts = Vec::with_capacity(n * n);
        let mut cols = Vec::with_capacity(n * n);
        let mut txs = Vec::with_capacity(n * n);
        for i in 0 .. n {
            let v = i as f32 * step;
            for j in 0 .. n {
                let u = j as f32 * step;
                pts.push(bilerp(verts, u, v));
                if let Some(c) = colors {
                    cols.push(bilerp_color(c, u, v));
                }
                if let Some(t) = texs {
                    txs.push(bilerp(t, u, v));
                }
            }
        }
        let indices = quad_indices(level);
        let cols = colors.map(|_| &cols[..]);
        let txs = texs.map(|_| &txs[..]);
        self.draw_mesh(&pts, cols, txs, indices.len() / 3, &indices, paint);
    }
}

/// Values at three indices, None if any is out of range
fn gather<T: Copy>(src: &[T], idx: &[usize; 3]) -> Option<[T; 3]> {
    Some([*src.get(idx[0])?, *src.get(idx[1])?, *src.get(idx[2])?])
}

/// Bilinear interpolation across corners ordered TL, TR, BR, BL
fn bilerp(c: &[Point; 4], u: f32, v: f32) -> Point {
    let a = c[0].lerp(c[3], v);
    let b = c[1].lerp(c[2], v);
    a.lerp(b, u)
}

fn bilerp_color(c: &[Color; 4], u: f32, v: f32) -> Color {
    let a = c[0] * (1.0 - v) + c[3] * v;
    let b = c[1] * (1.0 - v) + c[2] * v;
    a * (1.0 - u) + b * u
}

/// Triangle indices for a `(level + 2)` square grid of points
pub fn quad_indices(level: usize) -> Vec<usize> {
    let n = level + 2;
    let mut idx = Vec::with_capacity(6 * (n - 1) * (n - 1));
    for i in 0 .. n - 1 {
        for j in 0 .. n - 1 {
            let lt = i * n + j;
            let lb = lt + n;
            idx.extend_from_slice(&[lt, lt + 1, lb, lt + 1, lb, lb + 1]);
        }
    }
    idx
}
