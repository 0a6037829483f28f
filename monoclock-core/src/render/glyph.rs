//! Single-glyph rasterizer

use super::{PixelTarget, RenderError};
use crate::font::codepage::{char_code, substitute};
use crate::font::Font;

/// What a glyph draw produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphKind {
    /// The character's bitmap was drawn
    Bitmap,
    /// The character has no glyph in this font; its cell was cleared
    Blank,
}

/// Look up the bitmap a character is drawn with
///
/// Applies code-page substitution first. `None` when the character has
/// no glyph in `font`.
pub fn resolve_glyph<'a>(font: &Font<'a>, ch: char) -> Option<&'a [u8]> {
    let code = substitute(char_code(ch)?);
    font.glyph(code)
}

/// Draw one character with its top-left corner at (x, y)
///
/// Every pixel of the cell is written: set for 1 bits, cleared for 0 bits.
/// Characters without a glyph clear the whole cell. Pixels falling outside
/// the target are dropped.
pub fn draw_glyph<T: PixelTarget + ?Sized>(
    target: &mut T,
    ch: char,
    x: i32,
    y: i32,
    font: &Font<'_>,
) -> Result<GlyphKind, RenderError> {
    if font.cell_width == 0 {
        return Err(RenderError::ZeroWidthFont);
    }

    let row_bytes = font.row_bytes();
    let width = font.cell_width as usize;

    let Some(bitmap) = resolve_glyph(font, ch) else {
        for row in 0..font.cell_height as i32 {
            for column in 0..width as i32 {
                target.set_pixel(x + column, y + row, false);
            }
        }
        return Ok(GlyphKind::Blank);
    };

    for (row, bytes) in bitmap.chunks_exact(row_bytes).enumerate() {
        let py = y + row as i32;
        let mut column = 0usize;
        for &byte in bytes {
            let mut bits = byte;
            for _ in 0..8 {
                if column == width {
                    break;
                }
                target.set_pixel(x + column as i32, py, bits & 0x01 != 0);
                bits >>= 1;
                column += 1;
            }
        }
    }

    Ok(GlyphKind::Bitmap)
}
