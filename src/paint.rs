//! Paint
//!
//! Everything about how a shape is filled: a straight color or a borrowed
//! [Shader], a [BlendMode] and an overall alpha.
//!
//!     use softcanvas::{Paint, Color, BlendMode};
//!
//!     let paint = Paint::new(Color::rgba(1.0, 0.0, 0.0, 1.0))
//!         .with_blend_mode(BlendMode::SrcOver)
//!         .with_alpha(0.5);
//!     assert_eq!(paint.source_color().a, 0.5);

use crate::blend::{AlphaClass, BlendMode, BlendProc};
use crate::color::{Color, Pixel};
use crate::transform::Transform;
use crate::Shader;

#[derive(Clone,Copy)]
pub struct Paint<'a> {
    pub color: Color,
    pub shader: Option<&'a dyn Shader>,
    pub blend_mode: BlendMode,
    /// Multiplies the alpha of the color or of the shader output
    pub alpha: f32,
}

impl<'a> std::fmt::Debug for Paint<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("shader", &self.shader.is_some())
            .field("blend_mode", &self.blend_mode)
            .field("alpha", &self.alpha)
            .finish()
    }
}

impl<'a> Default for Paint<'a> {
    /// Opaque black, SrcOver
    fn default() -> Self {
        Self::new(Color::black())
    }
}

impl<'a> Paint<'a> {
    pub fn new(color: Color) -> Self {
        Self { color, shader: None, blend_mode: BlendMode::SrcOver, alpha: 1.0 }
    }
    pub fn from_shader(shader: &'a dyn Shader) -> Self {
        Self { shader: Some(shader), .. Self::default() }
    }
    pub fn with_color(self, color: Color) -> Self {
        Self { color, .. self }
    }
    pub fn with_shader(self, shader: &'a dyn Shader) -> Self {
        Self { shader: Some(shader), .. self }
    }
    pub fn with_blend_mode(self, blend_mode: BlendMode) -> Self {
        Self { blend_mode, .. self }
    }
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, .. self }
    }
    /// Color with the paint alpha applied
    pub fn source_color(&self) -> Color {
        self.color.with_alpha_scaled(self.alpha)
    }
    /// What is known about the alpha of every source pixel
    pub fn alpha_class(&self) -> AlphaClass {
        match self.shader {
            Some(sh) if sh.is_opaque() && self.alpha >= 1.0 => AlphaClass::Opaque,
            Some(_) => AlphaClass::Variable,
            None => AlphaClass::from_alpha(self.source_color().a),
        }
    }
    /// Blend mode after alpha class optimisation
    pub fn effective_blend_mode(&self) -> BlendMode {
        self.blend_mode.optimize(self.alpha_class())
    }
    /// Prepare to fill spans in a device whose current transform is `ctm`
    ///
    /// None when nothing would be drawn: the effective blend mode leaves
    /// the destination unchanged or the shader rejects the transform.
    pub fn blitter(&self, ctm: &Transform) -> Option<Blitter<'a>> {
        let mode = self.effective_blend_mode();
        let proc = match mode.proc() {
            Some(f) => f,
            None => {
                log::trace!(target: "canvas", "PAINT: {:?} is a no-op", self.blend_mode);
                return None;
            },
        };
        let source = match self.shader {
            Some(sh) => {
                if !sh.set_context(ctm) {
                    log::debug!(target: "canvas", "PAINT: shader rejected transform {:?}", ctm);
                    return None;
                }
                Source::Shader(sh, self.alpha)
            },
            None => Source::Solid(self.source_color().premul()),
        };
        Some(Blitter { proc, mode, source })
    }
}

/// Where span pixels come from
#[derive(Clone,Copy)]
pub enum Source<'a> {
    Solid(Pixel),
    /// Shader output, scaled by an alpha
    Shader(&'a dyn Shader, f32),
}

/// A prepared [Paint]: pixel source and blend function
#[derive(Clone,Copy)]
pub struct Blitter<'a> {
    pub proc: BlendProc,
    pub mode: BlendMode,
    pub source: Source<'a>,
}
