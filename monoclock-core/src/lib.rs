//! Board-agnostic core logic for the OLED clock display
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Page-addressed monochrome framebuffer
//! - Bitmap fonts, glyph lookup and code-page substitution
//! - Glyph rasterizer and single-line text layout
//! - Refresh scheduling (first-frame greeting, fixed cadence)
//! - Display configuration types
//! - Time-of-day text

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod font;
pub mod framebuffer;
pub mod refresh;
pub mod render;
pub mod time;

pub use config::{ConfigError, DisplayConfig, Timing};
pub use framebuffer::{FrameBuffer, Oled128x32};
pub use refresh::{RefreshAction, RefreshScheduler};
pub use render::{draw_glyph, draw_text, GlyphKind, PixelTarget, RenderError, TextExtent};
pub use time::{ClockTime, TimeSource, TimeText};
