//! Bitmap shader and tile modes

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::point::Point;
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

/// How coordinates outside of a shader's domain are mapped back into it
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TileMode {
    /// Saturate to the edge
    Clamp,
    /// Wrap around
    Repeat,
    /// Reflect at every edge
    Mirror,
}

impl Default for TileMode {
    fn default() -> TileMode {
        TileMode::Clamp
    }
}

impl TileMode {
    /// Map `v` into `0 .. bound` pixels
    pub fn tile_index(self, v: f32, bound: usize) -> usize {
        let b = bound as i64;
        let n = v.floor() as i64;
        let i = match self {
            TileMode::Clamp => n.max(0).min(b - 1),
            TileMode::Repeat => n.rem_euclid(b),
            TileMode::Mirror => {
                let m = n.rem_euclid(2 * b);
                if m >= b { 2 * b - 1 - m } else { m }
            },
        };
        i as usize
    }
    /// Map `v` into the unit interval
    pub fn tile_unit(self, v: f32) -> f32 {
        match self {
            TileMode::Clamp => v.max(0.0).min(1.0),
            TileMode::Repeat => v - v.floor(),
            TileMode::Mirror => {
                let f = v.floor();
                let x = v - f;
                if (f as i64).rem_euclid(2) == 1 { 1.0 - x } else { x }
            },
        }
    }
}

/// Device pixel center (x,y) mapped through `inv`, plus the per pixel step
pub(crate) fn start_and_step(inv: &Transform, x: i32, y: i32) -> (Point, Point) {
    let p = inv.map_point(Point::new(x as f32 + 0.5, y as f32 + 0.5));
    (p, Point::new(inv.sx, inv.shy))
}

/// Nearest neighbor sampling of a bitmap
///
/// `local` maps bitmap pixel space into the space the shader is drawn in.
#[derive(Debug)]
pub struct BitmapShader<'a> {
    bitmap: &'a Bitmap<'a>,
    local: Transform,
    tile_x: TileMode,
    tile_y: TileMode,
    inverse: Cell<Transform>,
}

impl<'a> BitmapShader<'a> {
    /// Shader using the same tile mode on both axes
    pub fn new(bitmap: &'a Bitmap<'a>, local: Transform, tile: TileMode) -> Self {
        Self::with_tiles(bitmap, local, tile, tile)
    }
    pub fn with_tiles(bitmap: &'a Bitmap<'a>, local: Transform, tile_x: TileMode, tile_y: TileMode) -> Self {
        Self { bitmap, local, tile_x, tile_y, inverse: Cell::new(Transform::new()) }
    }
}

impl<'a> Shader for BitmapShader<'a> {
    fn is_opaque(&self) -> bool {
        self.bitmap.is_opaque()
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
        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        if w == 0 || h == 0 {
            row.iter_mut().for_each(|p| *p = Pixel(0));
            return;
        }
        let (mut p, step) = start_and_step(&self.inverse.get(), x, y);
        for px in row.iter_mut() {
            let ix = self.tile_x.tile_index(p.x, w);
            let iy = self.tile_y.tile_index(p.y, h);
            *px = self.bitmap[(ix, iy)];
            p += step;
        }
    }
}
