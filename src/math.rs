//! Rounding and fixed point helpers

/// Round a float to the nearest integer, halfway cases toward +infinity
///
/// This matches how pixel centers are resolved everywhere in the rasterizer:
/// a coordinate of `2.5` lands on `3`, `-0.5` lands on `0`.
pub fn round_to_int(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Clamp an i32 into a u8 channel
pub fn clamp_u8(v: i32) -> u8 {
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

/// Multiply two channel values and divide by 255, rounding to nearest
///
/// Same trick as `multiply_u8` in agg_color_rgba.h:395
pub fn div255(v: u32) -> u32 {
    let t = v + 128;
    ((t >> 8) + t) >> 8
}

/// Scale a channel `c` by the fraction `f` (in [0,1]), rounding to nearest
pub fn scale_u8(c: u8, f: f32) -> i32 {
    (f * f32::from(c) + 0.5) as i32
}

/// Convert a float in [0,1] to a [0,255] channel, rounding to nearest
pub fn unit_to_u8(v: f32) -> u8 {
    clamp_u8(round_to_int(v * 255.0))
}
