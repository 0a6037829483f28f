//! Packed monochrome framebuffer
//!
//! Pixels are stored the way SSD1306-class controllers hold them in
//! GDDRAM: each byte is one column of an 8-row page, LSB at the top.
//! Pixel (x, y) lives in byte `x + (y / 8) * width`, bit `y & 7`, so the
//! buffer can be streamed to the controller as-is.

use crate::render::PixelTarget;

/// Framebuffer for a `W` x `P * 8` panel
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const P: usize> {
    pages: [[u8; W]; P],
}

/// 128x32 panel used by the reference board
pub type Oled128x32 = FrameBuffer<128, 4>;

impl<const W: usize, const P: usize> Default for FrameBuffer<W, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const P: usize> FrameBuffer<W, P> {
    /// Width in pixels
    pub const WIDTH: usize = W;
    /// Height in pixels
    pub const HEIGHT: usize = P * 8;
    /// Number of 8-row pages
    pub const PAGES: usize = P;
    /// Size of the packed buffer in bytes
    pub const BYTES: usize = W * P;

    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self { pages: [[0; W]; P] }
    }

    /// Byte index holding pixel (x, y)
    ///
    /// Callers must keep `x < W` and `y < P * 8`.
    pub const fn byte_index(x: usize, y: usize) -> usize {
        x + (y / 8) * W
    }

    /// Fill the whole buffer: all pixels off, or all pixels on
    pub fn clear(&mut self, filled: bool) {
        let value = if filled { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(value);
        }
    }

    /// Set or clear one pixel
    ///
    /// Returns `false` and leaves the buffer untouched when the pixel is
    /// outside the panel.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> bool {
        let Some((column, row)) = Self::checked(x, y) else {
            return false;
        };

        let byte = &mut self.pages[row / 8][column];
        let mask = 1u8 << (row & 7);
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        true
    }

    /// Read one pixel, `None` outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (column, row) = Self::checked(x, y)?;
        Some(self.pages[row / 8][column] & (1 << (row & 7)) != 0)
    }

    /// One page (8 rows) of columns
    pub fn page(&self, index: usize) -> Option<&[u8; W]> {
        self.pages.get(index)
    }

    /// The packed buffer, page-major, in controller order
    pub fn as_bytes(&self) -> &[u8] {
        self.pages.as_flattened()
    }

    /// Check whether every pixel is off
    pub fn is_blank(&self) -> bool {
        self.as_bytes().iter().all(|&b| b == 0)
    }

    fn checked(x: i32, y: i32) -> Option<(usize, usize)> {
        let column = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        if column < W && row < P * 8 {
            Some((column, row))
        } else {
            None
        }
    }
}

impl<const W: usize, const P: usize> PixelTarget for FrameBuffer<W, P> {
    fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> bool {
        FrameBuffer::set_pixel(self, x, y, on)
    }
}

impl<const W: usize, const P: usize> core::fmt::Debug for FrameBuffer<W, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &W)
            .field("height", &(P * 8))
            .finish_non_exhaustive()
    }
}
