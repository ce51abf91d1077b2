//! Errors
//!
//! Only bitmap construction and file I/O can fail. Drawing never returns
//! an error; degenerate or off-screen geometry simply draws nothing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid bitmap dimensions {width}x{height} with stride {stride}")]
    InvalidDimensions { width: usize, height: usize, stride: usize },

    #[error("pixel buffer too small: need {needed} pixels, got {len}")]
    BufferTooSmall { needed: usize, len: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
