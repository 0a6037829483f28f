//! Display drivers for Monoclock
//!
//! - [`ssd1306`] - SPI transport and bring-up for SSD1306-class controllers
//! - [`display`] - Clock display session: framebuffer, font and refresh cadence
//! - [`adapter`] - Bridges from `embedded-hal` 1.0 pins

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod display;
pub mod error;
pub mod ssd1306;

#[cfg(test)]
pub(crate) mod mock;

pub use display::ClockDisplay;
pub use error::DisplayError;
pub use ssd1306::Ssd1306;
