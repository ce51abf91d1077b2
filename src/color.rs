//! Colors
//!
//! [Color] is a straight (non-premultiplied) float color as supplied by
//! callers. [Pixel] is what lives in a [Bitmap](crate::Bitmap): 8 bit
//! premultiplied ARGB packed into a u32.

use crate::math::round_to_int;
use crate::math::clamp_u8;

use std::ops::{Add, Mul, Sub};

/// Color as Red, Green, Blue, and Alpha, each in [0,1]
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

fn pin_unit(v: f32) -> f32 {
    if v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

impl Color {
    /// Create new color
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    /// Create new color with alpha first
    pub fn argb(a: f32, r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a }
    }
    /// Opaque black
    pub fn black() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 1.0)
    }
    /// Opaque white
    pub fn white() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 1.0)
    }
    /// Fully transparent black
    pub fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }
    /// Clamp every component to [0,1]
    pub fn pin(&self) -> Self {
        Self::rgba(pin_unit(self.r), pin_unit(self.g), pin_unit(self.b), pin_unit(self.a))
    }
    /// Same color with its alpha scaled by `alpha`
    pub fn with_alpha_scaled(&self, alpha: f32) -> Self {
        Self { a: self.a * alpha, .. *self }
    }
    /// Premultiply and pack
    ///
    /// Components are clamped to [0,1] first. Alpha is rounded to 8 bits and
    /// each color channel is the rounded product of that alpha and the channel.
    pub fn premul(&self) -> Pixel {
        let c = self.pin();
        let a = round_to_int(c.a * 255.0);
        let af = a as f32;
        Pixel::pack_argb(clamp_u8(a),
                         clamp_u8(round_to_int(af * c.r)),
                         clamp_u8(round_to_int(af * c.g)),
                         clamp_u8(round_to_int(af * c.b)))
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, c: Color) -> Color {
        Color::rgba(self.r + c.r, self.g + c.g, self.b + c.b, self.a + c.a)
    }
}
impl Sub for Color {
    type Output = Color;
    fn sub(self, c: Color) -> Color {
        Color::rgba(self.r - c.r, self.g - c.g, self.b - c.b, self.a - c.a)
    }
}
impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color::rgba(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

/// Premultiplied 8 bit ARGB packed as `a << 24 | r << 16 | g << 8 | b`
///
/// Color channels never exceed alpha.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Pack premultiplied components
    pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Pixel(u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }
    pub fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub fn g(self) -> u8 { (self.0 >>  8) as u8 }
    pub fn b(self) -> u8 { self.0 as u8 }
    /// Components as `[a, r, g, b]`
    pub fn argb(self) -> [u8; 4] {
        [self.a(), self.r(), self.g(), self.b()]
    }
    pub fn is_opaque(self) -> bool {
        self.a() == 255
    }
    /// Undo premultiplication, returning `[r, g, b, a]`
    pub fn unpremul(self) -> [u8; 4] {
        let a = self.a();
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let f = 255.0 / f32::from(a);
        let un = |c: u8| clamp_u8(round_to_int(f32::from(c) * f));
        [un(self.r()), un(self.g()), un(self.b()), a]
    }
    /// Premultiply straight 8 bit `[r, g, b, a]`
    pub fn from_unpremul(rgba: [u8; 4]) -> Self {
        let a = rgba[3];
        let af = f32::from(a) / 255.0;
        let pm = |c: u8| clamp_u8(round_to_int(f32::from(c) * af));
        Pixel::pack_argb(a, pm(rgba[0]), pm(rgba[1]), pm(rgba[2]))
    }
}

impl From<Color> for Pixel {
    fn from(c: Color) -> Pixel {
        c.premul()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        let p = Pixel::pack_argb(0xFF, 0x80, 0x40, 0x01);
        assert_eq!(p.0, 0xFF80_4001);
        assert_eq!(p.argb(), [0xFF, 0x80, 0x40, 0x01]);
        assert!(p.is_opaque());
    }

    #[test]
    fn premul_rounds() {
        assert_eq!(Color::rgba(1., 0., 0., 0.25).premul().argb(), [0x40, 0x40, 0, 0]);
        assert_eq!(Color::rgba(0., 0., 1., 0.75).premul().argb(), [0xBF, 0, 0, 0xBF]);
        assert_eq!(Color::rgba(1., 0., 0., 1.).premul().argb(), [0xFF, 0xFF, 0, 0]);
        assert_eq!(Color::rgba(1., 1., 1., 0.).premul(), Pixel(0));
        // Out of range components are pinned
        assert_eq!(Color::rgba(2., -1., 0.5, 3.).premul().argb(), [0xFF, 0xFF, 0, 0x80]);
    }

    #[test]
    fn unpremul() {
        let p = Color::rgba(1.0, 0.5, 0.0, 0.5).premul();
        let [r, g, b, a] = p.unpremul();
        assert_eq!((r, b, a), (255, 0, 128));
        assert!((i32::from(g) - 128).abs() <= 1);
        assert_eq!(Pixel::from_unpremul([255, 0, 0, 128]).argb(), [128, 128, 0, 0]);
        assert_eq!(Pixel(0).unpremul(), [0, 0, 0, 0]);
    }

    #[test]
    fn color_math() {
        let c = Color::rgba(0.2, 0.4, 0.6, 1.0) - Color::rgba(0.2, 0.2, 0.2, 0.5);
        let c = c * 2.0 + Color::black();
        assert!((c.g - 0.4).abs() < 1e-6);
        assert!((c.a - 2.0).abs() < 1e-6);
        assert_eq!(c.pin().a, 1.0);
    }
}
