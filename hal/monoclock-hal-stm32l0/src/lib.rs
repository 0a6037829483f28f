//! STM32L0-specific HAL for the Monoclock firmware
//!
//! Implements the `monoclock-hal` traits on top of `embassy-stm32`:
//!
//! - [`spi::L0Spi`] - Blocking transmit-only SPI master
//! - [`time::EmbassyClock`] - Millisecond tick from `embassy-time`
//!
//! # Features
//!
//! - `stm32l031k6` - STM32L031K6 (Nucleo-32 reference board)
//! - `stm32l053r8` - STM32L053R8 (Nucleo-64)
//! - `defmt` - Enable debug formatting support

#![no_std]

pub mod spi;
pub mod time;

pub use spi::{spi_config, L0Spi, SpiBusError};
pub use time::EmbassyClock;
