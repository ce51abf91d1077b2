//! Rendering Base
//!
//! Writes spans into a [Bitmap] through a [Blitter], clipping every span
//! to the bitmap first.

use crate::blend;
use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::math::{clamp_u8, scale_u8};
use crate::paint::{Blitter, Source};
use crate::scan::Span;

use std::cmp::max;
use std::cmp::min;

#[derive(Debug)]
pub struct RenderingBase<'a> {
    pub bitmap: Bitmap<'a>,
    /// Scratch row for shader output
    row: Vec<Pixel>,
}

impl<'a> RenderingBase<'a> {
    pub fn new(bitmap: Bitmap<'a>) -> Self {
        RenderingBase { bitmap, row: vec![] }
    }
    /// Set every pixel, ignoring blending
    pub fn clear(&mut self, color: Pixel) {
        self.bitmap.fill(color);
    }
    /// Pixel limits, inclusive (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i32,i32,i32,i32) {
        let w = self.bitmap.width() as i32;
        let h = self.bitmap.height() as i32;
        (0, w-1, 0, h-1)
    }
    /// Clip a span to the bitmap, None if nothing remains
    pub fn clip_span(&self, span: &Span) -> Option<Span> {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if span.y > ymax || span.y < ymin {
            return None;
        }
        let x1 = max(span.x, xmin);
        let x2 = min(span.end() - 1, xmax);
        if x2 < x1 {
            return None;
        }
        Some(Span::new(x1, span.y, x2 - x1 + 1))
    }
    /// Blend `x1 .. x2` on row y, x2 exclusive
    pub fn blend_hline(&mut self, x1: i32, y: i32, x2: i32, blitter: &Blitter) {
        let (x1, x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        self.blend_span(&Span::new(x1, y, x2 - x1), blitter);
    }
    /// Blend one span
    pub fn blend_span(&mut self, span: &Span, blitter: &Blitter) {
        let span = match self.clip_span(span) {
            Some(s) => s,
            None => return,
        };
        log::trace!(target: "canvas", "BLEND SPAN x,y {} {} len {}", span.x, span.y, span.len);
        let (x, len) = (span.x as usize, span.len as usize);
        match blitter.source {
            Source::Solid(src) => {
                let dst = &mut self.bitmap.row_mut(span.y as usize)[x .. x + len];
                blend::blend_solid(blitter.proc, src, dst);
            },
            Source::Shader(shader, alpha) => {
                self.row.resize(len, Pixel(0));
                shader.shade_row(span.x, span.y, &mut self.row);
                if alpha < 1.0 {
                    scale_row(&mut self.row, alpha);
                }
                let dst = &mut self.bitmap.row_mut(span.y as usize)[x .. x + len];
                blend::blend_row(blitter.proc, &self.row, dst);
            },
        }
    }
    pub fn blend_spans(&mut self, spans: &[Span], blitter: &Blitter) {
        for span in spans {
            self.blend_span(span, blitter);
        }
    }
}

/// Scale premultiplied pixels by `alpha`
fn scale_row(row: &mut [Pixel], alpha: f32) {
    let f = alpha.max(0.0);
    let ch = |c: u8| clamp_u8(scale_u8(c, f));
    for p in row.iter_mut() {
        *p = Pixel::pack_argb(ch(p.a()), ch(p.r()), ch(p.g()), ch(p.b()));
    }
}
