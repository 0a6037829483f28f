//! Monoclock Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the display stack is written
//! against. Chip-specific crates implement them; host tests implement them
//! with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  monoclock-drivers (SSD1306 transport)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  monoclock-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ monoclock-hal-│       │  test mocks   │
//! │    stm32l0    │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Control lines (CS, DC, RST)
//! - [`spi::SpiBus`] - Transmit-only SPI master with busy/TX-empty status
//! - [`time::Clock`] - Monotonic millisecond tick and blocking delay

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::SpiBus;
pub use time::Clock;
