//! SPI bus driver for STM32L0
//!
//! The display bus is transmit-only and driven in blocking mode: every
//! call returns once the last bit is on the wire, so between calls the
//! peripheral always reads as idle with an empty transmit buffer.

use embassy_stm32::mode::Blocking;
use embassy_stm32::spi::mode::Master;
use embassy_stm32::spi::{self, Error as SpiError, Spi};
use embassy_stm32::time::Hertz;
use embassy_time::Instant;
use monoclock_hal::spi::{BitOrder, Phase, Polarity, SpiConfig, TransferError};
use monoclock_hal::time::timed_out;
use monoclock_hal::SpiBus;

/// Error from SPI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError {
    /// Frame format error
    Framing,
    /// CRC mismatch
    Crc,
    /// Master mode fault
    ModeFault,
    /// Receive overrun
    Overrun,
    /// Other error
    Other,
}

impl From<SpiError> for SpiBusError {
    fn from(e: SpiError) -> Self {
        match e {
            SpiError::Framing => SpiBusError::Framing,
            SpiError::Crc => SpiBusError::Crc,
            SpiError::ModeFault => SpiBusError::ModeFault,
            SpiError::Overrun => SpiBusError::Overrun,
            #[allow(unreachable_patterns)]
            _ => SpiBusError::Other,
        }
    }
}

/// Convert a bus configuration to the embassy peripheral configuration
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let mut out = spi::Config::default();
    out.frequency = Hertz(config.frequency);
    out.mode = spi::Mode {
        polarity: match config.polarity {
            Polarity::IdleLow => spi::Polarity::IdleLow,
            Polarity::IdleHigh => spi::Polarity::IdleHigh,
        },
        phase: match config.phase {
            Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
            Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
        },
    };
    out.bit_order = match config.bit_order {
        BitOrder::MsbFirst => spi::BitOrder::MsbFirst,
        BitOrder::LsbFirst => spi::BitOrder::LsbFirst,
    };
    out
}

/// Blocking transmit-only SPI master
pub struct L0Spi<'d> {
    spi: Spi<'d, Blocking, Master>,
}

impl<'d> L0Spi<'d> {
    /// Wrap a blocking embassy SPI peripheral
    pub fn new(spi: Spi<'d, Blocking, Master>) -> Self {
        Self { spi }
    }
}

impl SpiBus for L0Spi<'_> {
    type Error = SpiBusError;

    fn is_busy(&self) -> bool {
        false
    }

    fn is_tx_empty(&self) -> bool {
        true
    }

    fn write_raw(&mut self, byte: u8) -> Result<(), SpiBusError> {
        self.spi.blocking_write(&[byte]).map_err(SpiBusError::from)
    }

    fn write(&mut self, data: &[u8], timeout_ms: u32) -> Result<(), TransferError<SpiBusError>> {
        let start = Instant::now();
        self.spi
            .blocking_write(data)
            .map_err(|e| TransferError::Bus(e.into()))?;

        // A blocking transfer cannot be interrupted; a stalled one is only
        // reported once it finishes.
        if timed_out(start.elapsed().as_millis(), timeout_ms) {
            return Err(TransferError::Timeout);
        }
        Ok(())
    }
}
