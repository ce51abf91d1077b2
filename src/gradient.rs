//! Linear gradients

use crate::color::{Color, Pixel};
use crate::point::Point;
use crate::shader::{start_and_step, TileMode};
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

/// Colors evenly spaced along the line from `p0` to `p1`
///
/// The local space puts `p0` at x = 0 and `p1` at x = 1; colors are
/// interpolated as straight colors and premultiplied per pixel.
#[derive(Debug)]
pub struct LinearGradient {
    local: Transform,
    colors: Vec<Color>,
    tile: TileMode,
    inverse: Cell<Transform>,
}

impl LinearGradient {
    /// Create a gradient, None if `colors` is empty
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile: TileMode) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let d = p1 - p0;
        let local = Transform::from_rows(d.x, -d.y, p0.x,
                                         d.y,  d.x, p0.y);
        Some(Self { local, colors: colors.to_vec(), tile,
                    inverse: Cell::new(Transform::new()) })
    }
    /// Color at local coordinate x, before premultiplication
    pub fn color_at(&self, x: f32) -> Color {
        let n = self.colors.len();
        if n == 1 {
            return self.colors[0];
        }
        let pos = self.tile.tile_unit(x) * (n - 1) as f32;
        let k = (pos.floor() as usize).min(n - 2);
        let t = pos - k as f32;
        self.colors[k] * (1.0 - t) + self.colors[k + 1] * t
    }
}

impl Shader for LinearGradient {
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
        if self.colors.len() == 1 {
            let p = self.colors[0].premul();
            row.iter_mut().for_each(|v| *v = p);
            return;
        }
        let (mut p, step) = start_and_step(&self.inverse.get(), x, y);
        for px in row.iter_mut() {
            *px = self.color_at(p.x).premul();
            p += step;
        }
    }
}
