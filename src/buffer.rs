//! Rendering buffer

use crate::color::Pixel;
use crate::error::{Error, Result};

use std::ops::Index;
use std::ops::IndexMut;

#[derive(Debug)]
enum Storage<'a> {
    Owned(Vec<Pixel>),
    Borrowed(&'a mut [Pixel]),
}

/// Bitmap of premultiplied pixels
///
/// Data is stored as row-major order (C-format). Rows are `stride` pixels
/// apart, only the first `width` pixels of each row belong to the image.
/// Storage is either owned or a view into caller memory.
#[derive(Debug)]
pub struct Bitmap<'a> {
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
    /// Distance between rows in pixels
    stride: usize,
    data: Storage<'a>,
}

impl Bitmap<'static> {
    /// Create a new transparent bitmap of width and height
    ///
    /// Data for the Image is allocated
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap { width, height, stride: width,
                 data: Storage::Owned(vec![Pixel(0); width * height]) }
    }
    /// Take ownership of tightly packed pixels
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        check_dimensions(width, height, width, pixels.len())?;
        Ok(Bitmap { width, height, stride: width, data: Storage::Owned(pixels) })
    }
}

fn check_dimensions(width: usize, height: usize, stride: usize, len: usize) -> Result<()> {
    if stride < width {
        return Err(Error::InvalidDimensions { width, height, stride });
    }
    let needed = if height == 0 { 0 } else { (height - 1) * stride + width };
    if len < needed {
        return Err(Error::BufferTooSmall { needed, len });
    }
    Ok(())
}

impl<'a> Bitmap<'a> {
    /// View caller memory as a bitmap
    ///
    /// `stride` is in pixels and must be at least `width`; `data` must hold
    /// `(height - 1) * stride + width` pixels.
    pub fn from_slice(width: usize, height: usize, stride: usize, data: &'a mut [Pixel]) -> Result<Self> {
        check_dimensions(width, height, stride, data.len())?;
        Ok(Bitmap { width, height, stride, data: Storage::Borrowed(data) })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn stride(&self) -> usize {
        self.stride
    }
    fn data(&self) -> &[Pixel] {
        match &self.data {
            Storage::Owned(v) => v.as_slice(),
            Storage::Borrowed(s) => &s[..],
        }
    }
    fn data_mut(&mut self) -> &mut [Pixel] {
        match &mut self.data {
            Storage::Owned(v) => v.as_mut_slice(),
            Storage::Borrowed(s) => &mut s[..],
        }
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[Pixel] {
        assert!(y < self.height, "request {} >= {} height :: row", y, self.height);
        let i = y * self.stride;
        &self.data()[i .. i + self.width]
    }
    /// Mutable pixels of row `y`
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        assert!(y < self.height, "request {} >= {} height :: row_mut", y, self.height);
        let (i, w) = (y * self.stride, self.width);
        &mut self.data_mut()[i .. i + w]
    }
    /// Pixel at (x,y) if inside the bitmap
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.data()[y * self.stride + x])
        } else {
            None
        }
    }
    /// Set every pixel
    pub fn fill(&mut self, p: Pixel) {
        for y in 0 .. self.height {
            self.row_mut(y).iter_mut().for_each(|v| *v = p);
        }
    }
    /// Every pixel has full alpha
    pub fn is_opaque(&self) -> bool {
        (0 .. self.height).all(|y| self.row(y).iter().all(|p| p.is_opaque()))
    }
    /// Copy of the image, tightly packed
    pub fn to_vec(&self) -> Vec<Pixel> {
        let mut v = Vec::with_capacity(self.width * self.height);
        for y in 0 .. self.height {
            v.extend_from_slice(self.row(y));
        }
        v
    }
}

impl<'a> Index<(usize,usize)> for Bitmap<'a> {
    type Output = Pixel;
    fn index(&self, index: (usize, usize)) -> &Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data()[index.1 * self.stride + index.0]
    }
}
impl<'a> IndexMut<(usize,usize)> for Bitmap<'a> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = index.1 * self.stride + index.0;
        &mut self.data_mut()[i]
    }
}
