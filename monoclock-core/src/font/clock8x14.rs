//! 8x14 clock font
//!
//! A sparse font: the LUT maps CP437 codes to the handful of glyphs a
//! clock face needs (digits, separators, the greeting and the umlaut /
//! unit glyphs reached through substitution). Every other code maps to
//! glyph 0, the blank cell.
//!
//! Rows are one byte each, leftmost pixel in bit 0.

use super::Font;

/// 8x14 clock font
pub static FONT_8X14: Font<'static> = Font::new(&GLYPHS, 8, 14, Some(&LUT));

#[rustfmt::skip]
static GLYPHS: [u8; 350] = [
    // 0: ' ' (0x20)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 1: '0' (0x30)
    0x00, 0x3C, 0x66, 0x66, 0x76, 0x76, 0x6E,
    0x6E, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 2: '1' (0x31)
    0x00, 0x18, 0x1C, 0x1E, 0x18, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00,
    // 3: '2' (0x32)
    0x00, 0x3C, 0x66, 0x60, 0x30, 0x18, 0x0C,
    0x06, 0x06, 0x66, 0x7E, 0x00, 0x00, 0x00,
    // 4: '3' (0x33)
    0x00, 0x3C, 0x66, 0x60, 0x60, 0x38, 0x60,
    0x60, 0x60, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 5: '4' (0x34)
    0x00, 0x30, 0x38, 0x3C, 0x36, 0x33, 0x7F,
    0x30, 0x30, 0x30, 0x78, 0x00, 0x00, 0x00,
    // 6: '5' (0x35)
    0x00, 0x7E, 0x06, 0x06, 0x06, 0x3E, 0x60,
    0x60, 0x60, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 7: '6' (0x36)
    0x00, 0x38, 0x0C, 0x06, 0x06, 0x3E, 0x66,
    0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 8: '7' (0x37)
    0x00, 0x7E, 0x66, 0x60, 0x30, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00,
    // 9: '8' (0x38)
    0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x66,
    0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 10: '9' (0x39)
    0x00, 0x3C, 0x66, 0x66, 0x66, 0x7C, 0x60,
    0x60, 0x60, 0x30, 0x1C, 0x00, 0x00, 0x00,
    // 11: ':' (0x3A)
    0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00,
    0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00,
    // 12: '-' (0x2D)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 13: '.' (0x2E)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00,
    // 14: 'C' (0x43)
    0x00, 0x3C, 0x66, 0x03, 0x03, 0x03, 0x03,
    0x03, 0x03, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 15: 'H' (0x48)
    0x00, 0x66, 0x66, 0x66, 0x66, 0x7E, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00,
    // 16: 'i' (0x69)
    0x00, 0x18, 0x18, 0x00, 0x1C, 0x18, 0x18,
    0x18, 0x18, 0x18, 0x3C, 0x00, 0x00, 0x00,
    // 17: a-uml (0x84)
    0x00, 0x66, 0x66, 0x00, 0x3C, 0x60, 0x7C,
    0x66, 0x66, 0x66, 0xDC, 0x00, 0x00, 0x00,
    // 18: A-uml (0x8E)
    0x66, 0x00, 0x18, 0x3C, 0x66, 0x66, 0x7E,
    0x66, 0x66, 0x66, 0x66, 0x00, 0x00, 0x00,
    // 19: o-uml (0x94)
    0x00, 0x66, 0x66, 0x00, 0x3C, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 20: O-uml (0x99)
    0x66, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 21: u-uml (0x81)
    0x00, 0x66, 0x66, 0x00, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0xDC, 0x00, 0x00, 0x00,
    // 22: U-uml (0x9A)
    0x66, 0x00, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x3C, 0x00, 0x00, 0x00,
    // 23: micro (0xE6)
    0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x03,
    // 24: degree (0xF8)
    0x00, 0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Glyph index for each code, indexed by `code - 1`
#[rustfmt::skip]
static LUT: [u8; 248] = [
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0x01
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0x11
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, 12, 13,  0,  1,  // 0x21
     2,  3,  4,  5,  6,  7,  8,  9, 10, 11,  0,  0,  0,  0,  0,  0,  // 0x31
     0,  0, 14,  0,  0,  0,  0, 15,  0,  0,  0,  0,  0,  0,  0,  0,  // 0x41
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0x51
     0,  0,  0,  0,  0,  0,  0,  0, 16,  0,  0,  0,  0,  0,  0,  0,  // 0x61
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0x71
    21,  0,  0, 17,  0,  0,  0,  0,  0,  0,  0,  0,  0, 18,  0,  0,  // 0x81
     0,  0,  0, 19,  0,  0,  0,  0, 20, 22,  0,  0,  0,  0,  0,  0,  // 0x91
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0xA1
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0xB1
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0xC1
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0xD1
     0,  0,  0,  0,  0, 23,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  // 0xE1
     0,  0,  0,  0,  0,  0,  0, 24,  // 0xF1
];
