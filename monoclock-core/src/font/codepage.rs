//! Code-page substitution
//!
//! The bundled fonts follow CP437, while text arrives as Latin-1 /
//! Unicode. The handful of extended characters a clock display shows are
//! remapped to their CP437 positions before glyph lookup. The table is
//! fixed; every other code passes through unchanged.

/// Latin-1 code and the CP437 glyph index it is drawn with
pub const SUBSTITUTIONS: [(u8, u8); 8] = [
    (0xF6, 0x94), // ö
    (0xD6, 0x99), // Ö
    (0xFC, 0x81), // ü
    (0xDC, 0x9A), // Ü
    (0xE4, 0x84), // ä
    (0xC4, 0x8E), // Ä
    (0xB5, 0xE6), // µ
    (0xB0, 0xF8), // °
];

/// Remap a character code through the substitution table
pub fn substitute(code: u8) -> u8 {
    SUBSTITUTIONS
        .iter()
        .find(|&&(from, _)| from == code)
        .map_or(code, |&(_, to)| to)
}

/// Character code of a `char`, if it has one
///
/// Latin-1 code points (U+0000 to U+00FF) map to their byte value.
pub fn char_code(ch: char) -> Option<u8> {
    u8::try_from(u32::from(ch)).ok()
}
