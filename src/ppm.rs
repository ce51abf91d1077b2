//! Reading and writing of bitmap files
//!
//! Files are decoded and encoded with the `image` crate; the format follows
//! the file extension (`.png`, `.ppm`, ...). Pixels are premultiplied on
//! read and un-premultiplied on write.

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::error::Result;

use std::path::Path;

/// Decode an image file into an owned, premultiplied bitmap
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Bitmap<'static>> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let pixels = img.pixels().map(|p| Pixel::from_unpremul(p.0)).collect();
    Bitmap::from_pixels(w as usize, h as usize, pixels)
}

/// Straight RGBA bytes of a bitmap, row by row
pub fn to_rgba_bytes(bitmap: &Bitmap) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bitmap.width() * bitmap.height() * 4);
    for y in 0 .. bitmap.height() {
        for p in bitmap.row(y) {
            buf.extend_from_slice(&p.unpremul());
        }
    }
    buf
}

/// Encode a bitmap; formats without alpha drop it
pub fn write_file<P: AsRef<Path>>(bitmap: &Bitmap, filename: P) -> Result<()> {
    let (w, h) = (bitmap.width() as u32, bitmap.height() as u32);
    let rgba = to_rgba_bytes(bitmap);
    let filename = filename.as_ref();
    let has_alpha = filename.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if has_alpha {
        image::save_buffer(filename, &rgba, w, h, image::ColorType::Rgba8)?;
    } else {
        let rgb: Vec<u8> = rgba.chunks(4).flat_map(|p| p[..3].to_vec()).collect();
        image::save_buffer(filename, &rgb, w, h, image::ColorType::Rgb8)?;
    }
    log::debug!(target: "canvas", "WRITE: {:?} {}x{}", filename, w, h);
    Ok(())
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let b1 = read_file(f1)?;
    let b2 = read_file(f2)?;
    if b1.width() != b2.width() || b1.height() != b2.height() {
        log::debug!("images differ in size {}x{} {}x{}",
                    b1.width(), b1.height(), b2.width(), b2.height());
        return Ok(false);
    }
    let mut flag = true;
    for y in 0 .. b1.height() {
        for (x, (v1, v2)) in b1.row(y).iter().zip(b2.row(y).iter()).enumerate() {
            if v1 != v2 {
                log::debug!("[{},{}]: {:08x} {:08x}", x, y, v1.0, v2.0);
                flag = false;
            }
        }
    }
    Ok(flag)
}
