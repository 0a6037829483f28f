//! SPI bus abstractions
//!
//! The display only ever transmits, so the bus is modelled as a
//! transmit-only master that exposes the peripheral's status flags.
//! Callers busy-poll [`SpiBus::is_busy`] between transactions the way the
//! controller's datasheet timing expects.

/// Error from a bounded transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError<E> {
    /// The transfer did not complete within its timeout
    Timeout,
    /// The peripheral reported a fault
    Bus(E),
}

/// Transmit-only SPI bus master
pub trait SpiBus {
    /// Peripheral fault type
    type Error;

    /// Check the transmit-busy flag
    ///
    /// Returns `true` while a byte is still being shifted out.
    fn is_busy(&self) -> bool;

    /// Check the transmit-buffer-empty flag
    fn is_tx_empty(&self) -> bool;

    /// Place a single byte in the data register without waiting
    ///
    /// Used for hand-sequenced command streams where the caller polls
    /// [`is_tx_empty`](Self::is_tx_empty) and [`is_busy`](Self::is_busy)
    /// between bytes.
    fn write_raw(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Transmit `data`, blocking for at most `timeout_ms`
    fn write(&mut self, data: &[u8], timeout_ms: u32) -> Result<(), TransferError<Self::Error>>;
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
    /// Bit transmitted first
    pub bit_order: BitOrder,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 8_000_000, // 8 MHz, SSD1306 tops out at 10 MHz
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl SpiConfig {
    /// Configuration with the given mode and frequency, MSB first
    pub fn new(mode: Mode, frequency: u32) -> Self {
        let (polarity, phase) = mode.into();
        Self {
            frequency,
            polarity,
            phase,
            bit_order: BitOrder::MsbFirst,
        }
    }

    /// Get the SPI mode for this configuration
    pub fn mode(&self) -> Mode {
        match (self.polarity, self.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Mode::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Mode::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Mode::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Mode::Mode3,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
