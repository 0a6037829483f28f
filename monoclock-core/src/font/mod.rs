//! Bitmap fonts
//!
//! A font is a table of fixed-size glyph bitmaps plus an optional lookup
//! table (LUT). Each glyph is `cell_height` rows of `row_bytes` bytes,
//! leftmost pixel in bit 0 of the first byte of the row.
//!
//! Without a LUT the table is dense and indexed by character code. With a
//! LUT, `lut[code - 1]` gives the glyph index, which lets a font carry only
//! the glyphs it needs from a sparse code range.

mod clock8x14;
pub mod codepage;

pub use clock8x14::FONT_8X14;
pub use codepage::substitute;

/// Fixed-cell bitmap font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    /// Glyph bitmaps, back to back
    pub bitmap: &'a [u8],
    /// Glyph cell width in pixels
    pub cell_width: u8,
    /// Glyph cell height in pixels
    pub cell_height: u8,
    /// Optional sparse-code lookup table, indexed by `code - 1`
    pub lut: Option<&'a [u8]>,
}

impl<'a> Font<'a> {
    /// Create a font from its raw parts
    pub const fn new(
        bitmap: &'a [u8],
        cell_width: u8,
        cell_height: u8,
        lut: Option<&'a [u8]>,
    ) -> Self {
        Self {
            bitmap,
            cell_width,
            cell_height,
            lut,
        }
    }

    /// Bytes per glyph row
    pub const fn row_bytes(&self) -> usize {
        (self.cell_width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub const fn glyph_len(&self) -> usize {
        self.row_bytes() * self.cell_height as usize
    }

    /// Horizontal distance between the left edges of consecutive glyphs
    ///
    /// One blank column separates neighbouring cells.
    pub const fn advance(&self) -> i32 {
        self.cell_width as i32 + 1
    }

    /// Glyph index of a character code
    ///
    /// `None` when the font has a LUT and the code is 0 or past its end.
    pub fn glyph_index(&self, code: u8) -> Option<usize> {
        match self.lut {
            None => Some(code as usize),
            Some(lut) => {
                let slot = (code as usize).checked_sub(1)?;
                lut.get(slot).map(|&index| index as usize)
            }
        }
    }

    /// Byte offset of a character's glyph in the bitmap table
    ///
    /// This is the raw lookup; it does not apply code-page substitution.
    pub fn glyph_offset(&self, code: u8) -> Option<usize> {
        self.glyph_index(code).map(|index| index * self.glyph_len())
    }

    /// Bitmap rows of a character's glyph
    ///
    /// `None` when the code does not resolve or the glyph would run past
    /// the end of the bitmap table.
    pub fn glyph(&self, code: u8) -> Option<&'a [u8]> {
        let start = self.glyph_offset(code)?;
        self.bitmap.get(start..start + self.glyph_len())
    }
}
