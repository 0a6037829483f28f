//! SSD1306 Controller Command Protocol
//!
//! This crate describes what gets sent to the display controller, not how:
//! the command set, the one-time configuration table, and the address
//! window used before every full-frame push. The SPI framing (CS strobes,
//! DC select) lives in `monoclock-drivers`.
//!
//! # Wire Format
//!
//! With DC low every byte is a command or a command argument:
//! ```text
//! ┌────────┬───────────┬───────────┐
//! │ OPCODE │ ARG (opt) │ ARG (opt) │
//! │ 1B     │ 1B        │ 1B        │
//! └────────┴───────────┴───────────┘
//! ```
//! With DC high every byte is one column of one 8-row page of pixels.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod init;
pub mod window;

pub use command::{AddressingMode, ComScanDirection, Command, Encoded};
pub use init::{init_sequence, InitParams, Orientation, INIT_COMMANDS};
pub use window::{frame_window, AddressWindow};
