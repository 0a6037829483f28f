//! Display error type

use monoclock_core::RenderError;
use monoclock_hal::spi::TransferError;

/// Error from the display stack
///
/// `E` is the SPI peripheral's fault type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// The bus stayed busy past its timeout
    Timeout,
    /// The SPI peripheral reported a fault
    Bus(E),
    /// `poll` was called before `initialize`
    NotInitialized,
    /// `initialize` was called twice
    AlreadyInitialized,
    /// Text could not be rendered with the configured font
    Render(RenderError),
}

impl<E> From<TransferError<E>> for DisplayError<E> {
    fn from(e: TransferError<E>) -> Self {
        match e {
            TransferError::Timeout => DisplayError::Timeout,
            TransferError::Bus(e) => DisplayError::Bus(e),
        }
    }
}

impl<E> From<RenderError> for DisplayError<E> {
    fn from(e: RenderError) -> Self {
        DisplayError::Render(e)
    }
}
