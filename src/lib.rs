//! Aliased software rasterizer
//!
//! How does this work
//!
//! ```text
//!     canvas = Canvas( Bitmap )
//!     canvas.draw_*( geometry, paint )
//!
//!  Geometry
//!    draw_rect
//!      scale/translate only: corners mapped and rounded, rows filled directly
//!    draw_convex_polygon, draw_mesh, draw_quad
//!      points mapped by the current transform
//!      clip.line()       -- one or more Edges per side, clipped to the bitmap
//!      sort_edges()      -- by top, then bottom
//!      sweep_convex()    -- two active edges, x at each row center
//!    draw_path
//!      path copied and transformed
//!      edges()           -- contours closed, curves flattened to lines
//!      clip.line(), sort_edges()
//!      sweep_nonzero()   -- per row crossings sorted by x, winding accumulated
//!     Output: Spans with x, y, and length
//!  Render to Bitmap
//!    paint.blitter()
//!      blend mode optimized by source alpha class
//!      shader.set_context( transform )
//!    blend_span()
//!      span clipped to the bitmap
//!      shader.shade_row() or solid premultiplied color
//!      blend proc, Porter-Duff per pixel
//! ```
//!
//! Coordinates are sampled at pixel centers; there is no anti-aliasing.

pub mod math;
pub mod point;
pub mod transform;
pub mod edge;
pub mod clip;
pub mod curve;
pub mod path_storage;
pub mod scan;
pub mod raster;
pub mod color;
pub mod blend;
pub mod buffer;
pub mod base;
pub mod paint;
pub mod shader;
pub mod gradient;
pub mod triangle;
pub mod canvas;
pub mod ppm;
pub mod error;

pub use point::*;
pub use transform::*;
pub use edge::*;
pub use clip::*;
pub use path_storage::*;
pub use scan::*;
pub use raster::*;
pub use color::*;
pub use blend::*;
pub use buffer::*;
pub use base::*;
pub use paint::*;
pub use shader::*;
pub use gradient::*;
pub use triangle::*;
pub use canvas::*;
pub use ppm::*;
pub use error::{Error, Result};

/// Source of pixel colors for a span
///
/// [set_context](Shader::set_context) is called once per draw with the
/// canvas transform before any [shade_row](Shader::shade_row); a shader
/// keeps the inverse of its device mapping internally.
pub trait Shader {
    /// Every pixel this shader produces has full alpha
    fn is_opaque(&self) -> bool;
    /// Combine `ctm` with the local matrix and invert it
    ///
    /// Returns false if the combination cannot be inverted; nothing
    /// should be drawn with the shader then.
    fn set_context(&self, ctm: &Transform) -> bool;
    /// Premultiplied colors for `row.len()` pixels starting at device (x,y)
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]);
}
