//! Single-line text layout
//!
//! Glyphs are placed left to right on a fixed pitch of one cell plus one
//! blank column. There is no wrapping or kerning; text running off the
//! right edge is clipped by the target.

use super::glyph::{draw_glyph, GlyphKind};
use super::{PixelTarget, RenderError};
use crate::font::Font;

/// Summary of a text draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextExtent {
    /// Characters drawn
    pub glyphs: usize,
    /// Characters drawn as blank cells (no glyph in the font)
    pub blanks: usize,
    /// Horizontal distance the cursor advanced, in pixels
    pub width: i32,
}

/// Characters of `text` up to the first NUL
fn visible_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().take_while(|&ch| ch != '\0')
}

/// Draw `text` starting with its top-left corner at (x, y)
///
/// Stops at the end of the string or at an embedded NUL.
pub fn draw_text<T: PixelTarget + ?Sized>(
    target: &mut T,
    text: &str,
    x: i32,
    y: i32,
    font: &Font<'_>,
) -> Result<TextExtent, RenderError> {
    let mut extent = TextExtent::default();
    let mut cursor = x;

    for ch in visible_chars(text) {
        if draw_glyph(target, ch, cursor, y, font)? == GlyphKind::Blank {
            extent.blanks += 1;
        }
        extent.glyphs += 1;
        cursor += font.advance();
    }

    extent.width = cursor - x;
    Ok(extent)
}

/// Pixel advance `text` would take without drawing it
pub fn text_width(text: &str, font: &Font<'_>) -> i32 {
    visible_chars(text).count() as i32 * font.advance()
}
