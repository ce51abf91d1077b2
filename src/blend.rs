//! Porter-Duff Compositing
//!
//! Each [BlendMode] maps a premultiplied source and destination pixel to a
//! new destination pixel. Channels are combined as fractions of 255 and
//! rounded to nearest, alpha included, using S for source and D for the
//! destination:
//!
//! | Mode    | Result                  |
//! |---------|-------------------------|
//! | Clear   | 0                       |
//! | Src     | S                       |
//! | Dst     | D                       |
//! | SrcOver | S + (1-Sa)D             |
//! | DstOver | D + (1-Da)S             |
//! | SrcIn   | Da S                    |
//! | DstIn   | Sa D                    |
//! | SrcOut  | (1-Da)S                 |
//! | DstOut  | (1-Sa)D                 |
//! | SrcATop | Da S + (1-Sa)D          |
//! | DstATop | Sa D + (1-Da)S          |
//! | Xor     | (1-Sa)D + (1-Da)S       |
//!
//! When the source alpha is known ahead of time, [BlendMode::optimize]
//! picks a cheaper mode with identical results.

use crate::color::Pixel;
use crate::math::{clamp_u8, scale_u8};

/// Porter-Duff blend modes
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SrcOver
    }
}

/// What is known about the alpha of every source pixel
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum AlphaClass {
    /// Alpha may take any value
    Variable,
    /// Alpha is always 0
    Transparent,
    /// Alpha is always 255
    Opaque,
}

impl AlphaClass {
    /// Classify a straight alpha in [0,1]
    pub fn from_alpha(a: f32) -> AlphaClass {
        if a <= 0.0 {
            AlphaClass::Transparent
        } else if a >= 1.0 {
            AlphaClass::Opaque
        } else {
            AlphaClass::Variable
        }
    }
    fn index(self) -> usize {
        match self {
            AlphaClass::Variable    => 0,
            AlphaClass::Transparent => 1,
            AlphaClass::Opaque      => 2,
        }
    }
}

/// Blend a source pixel onto a destination pixel
pub type BlendProc = fn(Pixel, Pixel) -> Pixel;

impl BlendMode {
    pub const ALL: [BlendMode; 12] = [
        BlendMode::Clear, BlendMode::Src, BlendMode::Dst,
        BlendMode::SrcOver, BlendMode::DstOver,
        BlendMode::SrcIn, BlendMode::DstIn,
        BlendMode::SrcOut, BlendMode::DstOut,
        BlendMode::SrcATop, BlendMode::DstATop,
        BlendMode::Xor,
    ];

    /// Equivalent mode given the source alpha class
    ///
    /// `Dst` means the destination is left unchanged.
    pub fn optimize(self, class: AlphaClass) -> BlendMode {
        use self::BlendMode::*;
        // Columns: Variable, Transparent, Opaque
        let row = match self {
            Clear   => [Clear,   Clear, Clear],
            Src     => [Src,     Clear, Src],
            Dst     => [Dst,     Dst,   Dst],
            SrcOver => [SrcOver, Dst,   Src],
            DstOver => [DstOver, Dst,   DstOver],
            SrcIn   => [SrcIn,   Clear, SrcIn],
            DstIn   => [DstIn,   Clear, DstIn],
            SrcOut  => [SrcOut,  Clear, SrcOut],
            DstOut  => [DstOut,  Dst,   Clear],
            SrcATop => [SrcATop, Dst,   SrcIn],
            DstATop => [DstATop, Clear, DstATop],
            Xor     => [Xor,     Dst,   SrcOut],
        };
        row[class.index()]
    }
    /// Per pixel blend function, None for `Dst`
    pub fn proc(self) -> Option<BlendProc> {
        let f: BlendProc = match self {
            BlendMode::Clear   => clear,
            BlendMode::Src     => src,
            BlendMode::Dst     => return None,
            BlendMode::SrcOver => src_over,
            BlendMode::DstOver => dst_over,
            BlendMode::SrcIn   => src_in,
            BlendMode::DstIn   => dst_in,
            BlendMode::SrcOut  => src_out,
            BlendMode::DstOut  => dst_out,
            BlendMode::SrcATop => src_atop,
            BlendMode::DstATop => dst_atop,
            BlendMode::Xor     => xor,
        };
        Some(f)
    }
    /// Blend a single pixel
    pub fn blend(self, s: Pixel, d: Pixel) -> Pixel {
        match self.proc() {
            Some(f) => f(s, d),
            None => d,
        }
    }
}

fn frac(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Combine channels as `fs * s + fd * d`, rounding the sum once
fn combine(s: Pixel, fs: f32, d: Pixel, fd: f32) -> Pixel {
    let ch = |s: u8, d: u8| clamp_u8((fs * f32::from(s) + fd * f32::from(d) + 0.5) as i32);
    Pixel::pack_argb(ch(s.a(), d.a()), ch(s.r(), d.r()), ch(s.g(), d.g()), ch(s.b(), d.b()))
}

/// Scale every channel of `p` by `f`
fn scale(p: Pixel, f: f32) -> Pixel {
    let ch = |c: u8| clamp_u8(scale_u8(c, f));
    Pixel::pack_argb(ch(p.a()), ch(p.r()), ch(p.g()), ch(p.b()))
}

fn clear(_s: Pixel, _d: Pixel) -> Pixel {
    Pixel(0)
}
fn src(s: Pixel, _d: Pixel) -> Pixel {
    s
}
fn src_over(s: Pixel, d: Pixel) -> Pixel {
    if s.a() == 0xFF {
        return s;
    }
    combine(s, 1.0, d, 1.0 - frac(s.a()))
}
fn dst_over(s: Pixel, d: Pixel) -> Pixel {
    combine(s, 1.0 - frac(d.a()), d, 1.0)
}
fn src_in(s: Pixel, d: Pixel) -> Pixel {
    scale(s, frac(d.a()))
}
fn dst_in(s: Pixel, d: Pixel) -> Pixel {
    scale(d, frac(s.a()))
}
fn src_out(s: Pixel, d: Pixel) -> Pixel {
    scale(s, 1.0 - frac(d.a()))
}
fn dst_out(s: Pixel, d: Pixel) -> Pixel {
    scale(d, 1.0 - frac(s.a()))
}
fn src_atop(s: Pixel, d: Pixel) -> Pixel {
    combine(s, frac(d.a()), d, 1.0 - frac(s.a()))
}
fn dst_atop(s: Pixel, d: Pixel) -> Pixel {
    combine(s, 1.0 - frac(d.a()), d, frac(s.a()))
}
fn xor(s: Pixel, d: Pixel) -> Pixel {
    combine(s, 1.0 - frac(d.a()), d, 1.0 - frac(s.a()))
}

/// Blend a row of source pixels onto `dst`
pub fn blend_row(f: BlendProc, src: &[Pixel], dst: &mut [Pixel]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = f(*s, *d);
    }
}

/// Blend one source pixel onto every pixel of `dst`
pub fn blend_solid(f: BlendProc, src: Pixel, dst: &mut [Pixel]) {
    for d in dst.iter_mut() {
        *d = f(src, *d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(a: u8, r: u8, g: u8, b: u8) -> Pixel {
        Pixel::pack_argb(a, r, g, b)
    }

    #[test]
    fn opaque_modes() {
        let s = px(255, 255, 0, 0);
        let d = px(255, 0, 0, 255);
        assert_eq!(BlendMode::SrcOver.blend(s, d), s);
        assert_eq!(BlendMode::DstOver.blend(s, d), d);
        assert_eq!(BlendMode::Src.blend(s, d), s);
        assert_eq!(BlendMode::Dst.blend(s, d), d);
        assert_eq!(BlendMode::Clear.blend(s, d), Pixel(0));
        assert_eq!(BlendMode::SrcIn.blend(s, d), s);
        assert_eq!(BlendMode::SrcOut.blend(s, d), Pixel(0));
        assert_eq!(BlendMode::DstOut.blend(s, d), Pixel(0));
        assert_eq!(BlendMode::Xor.blend(s, d), Pixel(0));
        assert_eq!(BlendMode::SrcATop.blend(s, d), s);
        assert_eq!(BlendMode::DstATop.blend(s, d), d);
    }

    #[test]
    fn half_transparent_src_over() {
        let s = px(128, 128, 0, 0);
        let d = px(255, 0, 0, 255);
        // (1 - 128/255) * 255 = 127
        assert_eq!(BlendMode::SrcOver.blend(s, d).argb(), [255, 128, 0, 127]);
        // Onto transparent the source is unchanged
        assert_eq!(BlendMode::SrcOver.blend(s, Pixel(0)), s);
        assert_eq!(BlendMode::DstOver.blend(s, Pixel(0)), s);
        assert_eq!(BlendMode::SrcIn.blend(s, Pixel(0)), Pixel(0));
        assert_eq!(BlendMode::SrcOut.blend(s, Pixel(0)), s);
    }

    #[test]
    fn two_term_modes_round_once() {
        let s = px(128, 128, 0, 0);
        let d = px(128, 0, 0, 128);
        // 2 * (127/255 * 128) = 127.498
        assert_eq!(BlendMode::Xor.blend(s, d).argb(), [127, 64, 0, 64]);
        assert_eq!(BlendMode::Xor.blend(px(100, 60, 0, 40), px(200, 20, 180, 0)).argb(),
                   [143, 25, 109, 9]);
        // 1 * 128/255 + 2 * 127/255 = 1.498
        assert_eq!(BlendMode::SrcATop.blend(px(128, 1, 0, 0), px(128, 2, 0, 0)).argb(),
                   [128, 1, 0, 0]);
        // 1 * 127/255 + 2 * 128/255 = 1.502
        assert_eq!(BlendMode::DstATop.blend(px(128, 1, 0, 0), px(128, 2, 0, 0)).argb(),
                   [128, 2, 0, 0]);
    }

    #[test]
    fn results_stay_premultiplied() {
        let pixels = [px(0, 0, 0, 0), px(10, 10, 5, 0), px(128, 128, 64, 0),
                      px(200, 17, 200, 99), px(255, 255, 255, 255), px(255, 0, 3, 250)];
        for mode in BlendMode::ALL.iter() {
            for s in pixels.iter() {
                for d in pixels.iter() {
                    let r = mode.blend(*s, *d);
                    assert!(r.r() <= r.a() && r.g() <= r.a() && r.b() <= r.a(),
                            "{:?} {:?} {:?} -> {:?}", mode, s, d, r);
                }
            }
        }
    }

    #[test]
    fn optimized_modes_match() {
        let dsts = [px(0, 0, 0, 0), px(77, 20, 30, 77), px(255, 9, 99, 199)];
        let opaque = [px(255, 255, 0, 0), px(255, 1, 2, 3)];
        let transparent = [Pixel(0)];
        for mode in BlendMode::ALL.iter() {
            for (class, srcs) in &[(AlphaClass::Opaque, &opaque[..]),
                                   (AlphaClass::Transparent, &transparent[..])] {
                let fast = mode.optimize(*class);
                for s in srcs.iter() {
                    for d in dsts.iter() {
                        assert_eq!(mode.blend(*s, *d), fast.blend(*s, *d),
                                   "{:?} as {:?} for {:?}", mode, fast, class);
                    }
                }
            }
            assert_eq!(mode.optimize(AlphaClass::Variable), *mode);
        }
    }

    #[test]
    fn noop_rows() {
        assert!(BlendMode::Dst.proc().is_none());
        assert_eq!(BlendMode::SrcOver.optimize(AlphaClass::Transparent), BlendMode::Dst);
        assert_eq!(BlendMode::DstOut.optimize(AlphaClass::Opaque), BlendMode::Clear);

        let mut row = [px(255, 0, 0, 255); 3];
        if let Some(f) = BlendMode::Src.proc() {
            blend_solid(f, px(255, 255, 0, 0), &mut row[1..]);
        }
        assert_eq!(row[0], px(255, 0, 0, 255));
        assert_eq!(row[2], px(255, 255, 0, 0));
    }

    #[test]
    fn class_from_alpha() {
        assert_eq!(AlphaClass::from_alpha(0.0), AlphaClass::Transparent);
        assert_eq!(AlphaClass::from_alpha(1.0), AlphaClass::Opaque);
        assert_eq!(AlphaClass::from_alpha(0.5), AlphaClass::Variable);
    }
}
