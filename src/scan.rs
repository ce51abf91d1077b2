//! Scanlines
//!
//! A [Scanline] gathers the edge crossings of a single pixel row and turns
//! them into [Span]s using the nonzero winding rule.

/// Horizontal run of pixels on row `y`, covering `x .. x + len`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x: i32,
    pub y: i32,
    pub len: i32,
}

impl Span {
    pub fn new(x: i32, y: i32, len: i32) -> Self {
        Self { x, y, len }
    }
    /// One past the last pixel
    pub fn end(&self) -> i32 {
        self.x + self.len
    }
}

/// Edge crossings and filled spans of one row
#[derive(Debug,Default)]
pub struct Scanline {
    /// Crossing position and winding direction
    crossings: Vec<(i32, i32)>,
    pub spans: Vec<Span>,
    pub y: i32,
}

impl Scanline {
    pub fn new() -> Self {
        Self { crossings: vec![], spans: vec![], y: 0 }
    }
    /// Start a new row, dropping crossings and spans
    pub fn reset(&mut self, y: i32) {
        self.y = y;
        self.crossings.clear();
        self.spans.clear();
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Record an edge crossing at pixel boundary `x`
    pub fn add_crossing(&mut self, x: i32, winding: i32) {
        self.crossings.push((x, winding));
    }
    /// Append a span, merging it with the previous one if they touch
    pub fn add_span(&mut self, x: i32, len: i32) {
        if len <= 0 {
            return;
        }
        if let Some(cur) = self.spans.last_mut() {
            if cur.end() == x {
                cur.len += len;
                return;
            }
        }
        self.spans.push(Span::new(x, self.y, len));
    }
    /// Convert the recorded crossings into spans
    ///
    /// Crossings are ordered by x; crossings at the same x keep the order
    /// they were added in. A span opens when the winding count leaves zero
    /// and closes when it returns to zero.
    pub fn sweep_nonzero(&mut self) {
        self.crossings.sort_by_key(|c| c.0);
        let mut winding = 0;
        let mut left = 0;
        for i in 0 .. self.crossings.len() {
            let (x, dir) = self.crossings[i];
            if winding == 0 {
                left = x;
            }
            winding += dir;
            if winding == 0 {
                log::trace!("SCAN: y {} span {} .. {}", self.y, left, x);
                self.add_span(left, x - left);
            }
        }
    }
}
