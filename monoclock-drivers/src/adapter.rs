//! Bridges from `embedded-hal` 1.0
//!
//! Most chip HALs already expose their GPIO through `embedded-hal`. Any
//! infallible output can drive a control line through [`EhOutput`]
//! without a chip-specific wrapper.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use monoclock_hal::OutputPin;

/// `embedded-hal` output pin used as a display control line
///
/// The driven level is tracked here, since `embedded-hal` only reads the
/// output latch through `&mut self`.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P> EhOutput<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    /// Wrap an `embedded-hal` pin, driving it to `initial_high`
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        let result = if initial_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }

        Self {
            pin,
            high: initial_high,
        }
    }

    /// Unwrap the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EhOutput<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
