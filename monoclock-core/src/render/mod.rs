//! Glyph rasterization and text layout
//!
//! Rendering writes through [`PixelTarget`], so the same code draws into
//! the framebuffer on the device and into recording targets in tests.

pub mod glyph;
pub mod text;

pub use glyph::{draw_glyph, resolve_glyph, GlyphKind};
pub use text::{draw_text, text_width, TextExtent};

/// Something pixels can be written into
pub trait PixelTarget {
    /// Set or clear one pixel
    ///
    /// Returns `false` when the pixel lies outside the target; the write
    /// is dropped.
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> bool;
}

/// Rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Font declares a zero-pixel cell width
    ZeroWidthFont,
}
