//! SSD1306 SPI transport
//!
//! Drives an SSD1306-class controller over a transmit-only SPI bus with
//! three control lines:
//!
//! - CS frames each transaction. Before a transaction it is strobed
//!   (high, then low) to resynchronise the controller's serial interface.
//! - DC selects how the controller reads the bytes: low for commands,
//!   high for GDDRAM data.
//! - RST is pulsed once during bring-up.
//!
//! Every wait on the bus is bounded. A wait that runs out surfaces as
//! [`DisplayError::Timeout`] and is never retried here; the caller decides
//! whether the next refresh should try again.

use monoclock_core::config::Timing;
use monoclock_hal::time::timed_out;
use monoclock_hal::{Clock, OutputPin, SpiBus};
use monoclock_protocol::{frame_window, init_sequence, Command, InitParams};

use crate::error::DisplayError;

/// SSD1306 transport over SPI
pub struct Ssd1306<SPI, CS, DC, RST, CLK> {
    spi: SPI,
    cs: CS,
    dc: DC,
    rst: RST,
    clock: CLK,
    timing: Timing,
}

impl<SPI, CS, DC, RST, CLK> Ssd1306<SPI, CS, DC, RST, CLK>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    CLK: Clock,
{
    /// Create a transport from the bus, control lines and clock
    ///
    /// Nothing is sent until [`bring_up`](Self::bring_up).
    pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, clock: CLK, timing: Timing) -> Self {
        Self {
            spi,
            cs,
            dc,
            rst,
            clock,
            timing,
        }
    }

    /// Reset and configure the controller
    ///
    /// Leaves the panel on with GDDRAM contents undefined; the caller is
    /// expected to push a frame afterwards.
    pub fn bring_up(&mut self, params: &InitParams) -> Result<(), DisplayError<SPI::Error>> {
        self.rst.set_high();
        self.cs.set_high();
        self.dc.set_high();
        self.clock.delay_ms(self.timing.settle_ms);

        self.reset_pulse();

        for command in init_sequence(params) {
            self.send(command)?;
        }

        let timeout = self.timing.command_timeout_ms;
        self.wait_idle(timeout)?;
        self.cs.set_high();
        self.clock.delay_ms(self.timing.settle_ms);

        self.cs.set_low();
        self.wait_idle(timeout)?;
        self.cs.set_high();
        self.clock.delay_ms(self.timing.settle_ms);

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 configured, {} rows", params.height);

        Ok(())
    }

    /// Pulse RST: high, low, high, holding each level
    pub fn reset_pulse(&mut self) {
        let hold = self.timing.reset_hold_ms;
        self.rst.set_high();
        self.clock.delay_ms(hold);
        self.rst.set_low();
        self.clock.delay_ms(hold);
        self.rst.set_high();
        self.clock.delay_ms(hold);
    }

    /// Send every byte of `command`, each as its own command transaction
    pub fn send(&mut self, command: Command) -> Result<(), DisplayError<SPI::Error>> {
        for &byte in command.encode().iter() {
            self.send_command(byte)?;
        }
        Ok(())
    }

    /// Send one command byte
    ///
    /// CS is released afterwards even if the transfer fails.
    pub fn send_command(&mut self, byte: u8) -> Result<(), DisplayError<SPI::Error>> {
        let result = self.command_transaction(byte);
        self.cs.set_high();
        result
    }

    fn command_transaction(&mut self, byte: u8) -> Result<(), DisplayError<SPI::Error>> {
        let timeout = self.timing.command_timeout_ms;

        self.wait_idle(timeout)?;
        self.strobe_cs();
        self.dc.set_low();
        self.strobe_cs();

        self.spi.write(&[byte], timeout)?;
        self.wait_idle(timeout)
    }

    /// Push a full frame of `width` x `height` pixels
    ///
    /// The address window is reset to the whole panel first, so the
    /// transfer always starts at column 0 of page 0. CS is released
    /// afterwards even if the transfer fails.
    pub fn send_frame(
        &mut self,
        frame: &[u8],
        width: u8,
        height: u8,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let result = self.frame_transaction(frame, width, height);
        self.cs.set_high();

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("SSD1306 frame push failed");
        }

        result
    }

    fn frame_transaction(
        &mut self,
        frame: &[u8],
        width: u8,
        height: u8,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let command_timeout = self.timing.command_timeout_ms;
        let frame_timeout = self.timing.frame_timeout_ms;

        self.wait_idle(command_timeout)?;
        self.strobe_cs();
        self.dc.set_low();
        self.strobe_cs();

        for command in frame_window(width, height).commands() {
            for &byte in command.encode().iter() {
                self.spi.write_raw(byte).map_err(DisplayError::Bus)?;
                self.wait_tx_empty(command_timeout)?;
                self.wait_idle(command_timeout)?;
            }
        }

        self.dc.set_high();
        self.spi.write(frame, frame_timeout)?;
        self.wait_idle(frame_timeout)
    }

    /// Strobe CS: deselect then select
    pub fn strobe_cs(&mut self) {
        self.cs.set_high();
        self.cs.set_low();
    }

    /// Milliseconds since boot, from the transport's clock
    pub fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    /// Block for `ms` milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.clock.delay_ms(ms);
    }

    /// Timing in use
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Replace the timing used for delays and bus timeouts
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Give back the bus, control lines and clock
    pub fn release(self) -> (SPI, CS, DC, RST, CLK) {
        (self.spi, self.cs, self.dc, self.rst, self.clock)
    }

    fn wait_idle(&self, timeout_ms: u32) -> Result<(), DisplayError<SPI::Error>> {
        self.wait_until(timeout_ms, |spi| !spi.is_busy())
    }

    fn wait_tx_empty(&self, timeout_ms: u32) -> Result<(), DisplayError<SPI::Error>> {
        self.wait_until(timeout_ms, |spi| spi.is_tx_empty())
    }

    fn wait_until(
        &self,
        timeout_ms: u32,
        ready: impl Fn(&SPI) -> bool,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let start = self.clock.now_ms();
        while !ready(&self.spi) {
            if timed_out(self.clock.elapsed_ms(start) as u64, timeout_ms) {
                #[cfg(feature = "defmt")]
                defmt::warn!("SPI still busy after {} ms", timeout_ms);
                return Err(DisplayError::Timeout);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{transport, BusFault, Event};

    const REFERENCE_INIT: [u8; 25] = [
        0xAE, 0xD5, 0x80, 0xA8, 0x1F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1, 0xC8,
        0xDA, 0x02, 0x81, 0x8F, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
    ];

    #[test]
    fn test_send_command_framing() {
        let (mut oled, rig) = transport();
        oled.send_command(0xAE).unwrap();

        assert_eq!(
            rig.events(),
            vec![
                Event::Cs(true),
                Event::Cs(false),
                Event::Dc(false),
                Event::Cs(true),
                Event::Cs(false),
                Event::Write(vec![0xAE]),
                Event::Cs(true),
            ]
        );
    }

    #[test]
    fn test_multi_byte_command_is_split() {
        let (mut oled, rig) = transport();
        oled.send(Command::Contrast(0x8F)).unwrap();
        assert_eq!(rig.writes(), vec![vec![0x81], vec![0x8F]]);
    }

    #[test]
    fn test_send_frame_sequence() {
        let (mut oled, rig) = transport();
        let frame = [0xA5u8; 512];
        oled.send_frame(&frame, 128, 32).unwrap();

        let mut expected = vec![
            Event::Cs(true),
            Event::Cs(false),
            Event::Dc(false),
            Event::Cs(true),
            Event::Cs(false),
        ];
        for byte in [0x21, 0x00, 0x7F, 0x22, 0x00, 0x03] {
            expected.push(Event::Raw(byte));
        }
        expected.push(Event::Dc(true));
        expected.push(Event::Write(frame.to_vec()));
        expected.push(Event::Cs(true));

        assert_eq!(rig.events(), expected);
    }

    #[test]
    fn test_bring_up_reset_pulse_and_table() {
        let (mut oled, rig) = transport();
        oled.bring_up(&InitParams::default()).unwrap();

        let events = rig.events();
        assert_eq!(
            &events[..10],
            &[
                Event::Rst(true),
                Event::Cs(true),
                Event::Dc(true),
                Event::Delay(10),
                Event::Rst(true),
                Event::Delay(6),
                Event::Rst(false),
                Event::Delay(6),
                Event::Rst(true),
                Event::Delay(6),
            ]
        );

        // One transaction per byte
        let bytes: Vec<u8> = rig.writes().into_iter().flatten().collect();
        assert_eq!(bytes, REFERENCE_INIT);
        assert!(rig.writes().iter().all(|w| w.len() == 1));

        // Trailing CS handshake with two settle delays
        assert_eq!(
            &events[events.len() - 5..],
            &[
                Event::Cs(true),
                Event::Delay(10),
                Event::Cs(false),
                Event::Cs(true),
                Event::Delay(10),
            ]
        );
    }

    #[test]
    fn test_flipped_orientation_swaps_pair() {
        let (mut oled, rig) = transport();
        let params = InitParams {
            orientation: monoclock_protocol::Orientation::Flipped,
            ..InitParams::default()
        };
        oled.bring_up(&params).unwrap();

        let bytes: Vec<u8> = rig.writes().into_iter().flatten().collect();
        assert_eq!(&bytes[12..14], &[0xA0, 0xC0]);
    }

    #[test]
    fn test_stuck_bus_times_out() {
        let (mut oled, rig) = transport();
        rig.stuck.set(true);
        rig.step.set(100);

        assert_eq!(oled.send_command(0xAF), Err(DisplayError::Timeout));
        // Timed out before anything was clocked out, CS still released
        assert!(rig.writes().is_empty());
        assert_eq!(rig.events().last(), Some(&Event::Cs(true)));
        // Bounded by the command timeout
        assert!(rig.now.get() <= 2000 + 200);
    }

    #[test]
    fn test_frame_waits_for_idle_bus() {
        let (mut oled, rig) = transport();
        rig.step.set(50);
        rig.stuck.set(true);

        let frame = [0u8; 512];
        assert_eq!(oled.send_frame(&frame, 128, 32), Err(DisplayError::Timeout));
        assert!(!rig.events().contains(&Event::Raw(0x21)));
        assert_eq!(rig.events().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_command_write_timeout() {
        let (mut oled, rig) = transport();
        rig.write_timeout.set(true);

        assert_eq!(oled.send_command(0xAE), Err(DisplayError::Timeout));
        // Framed as a command, nothing transferred, CS released
        assert!(rig.events().contains(&Event::Dc(false)));
        assert!(rig.writes().is_empty());
        assert_eq!(rig.events().last(), Some(&Event::Cs(true)));
    }

    #[test]
    fn test_frame_bulk_write_timeout() {
        let (mut oled, rig) = transport();
        rig.write_timeout.set(true);

        let frame = [0x55u8; 512];
        assert_eq!(oled.send_frame(&frame, 128, 32), Err(DisplayError::Timeout));

        // Window went out in full, data phase started, no data landed
        let events = rig.events();
        for byte in [0x21, 0x00, 0x7F, 0x22, 0x00, 0x03] {
            assert!(events.contains(&Event::Raw(byte)));
        }
        assert!(events.contains(&Event::Dc(true)));
        assert!(rig.writes().is_empty());
        assert_eq!(events.last(), Some(&Event::Cs(true)));

        // Not retried; the next push goes through
        rig.clear();
        oled.send_frame(&frame, 128, 32).unwrap();
        assert_eq!(rig.writes(), vec![frame.to_vec()]);
    }

    #[test]
    fn test_frame_tx_empty_timeout() {
        let (mut oled, rig) = transport();
        rig.tx_stuck.set(true);
        rig.step.set(100);

        let frame = [0u8; 512];
        assert_eq!(oled.send_frame(&frame, 128, 32), Err(DisplayError::Timeout));

        // Stopped after the first window byte, before the data phase
        let raw: Vec<Event> = rig
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Raw(_)))
            .collect();
        assert_eq!(raw, vec![Event::Raw(0x21)]);
        assert!(!rig.events().contains(&Event::Dc(true)));
        assert!(rig.writes().is_empty());
        assert_eq!(rig.events().last(), Some(&Event::Cs(true)));
        // Bounded by the command timeout
        assert!(rig.now.get() <= 2000 + 200);
    }

    #[test]
    fn test_bus_fault_surfaces() {
        let (mut oled, rig) = transport();
        rig.fault.set(true);
        assert_eq!(oled.send_command(0xAE), Err(DisplayError::Bus(BusFault)));

        // Not retried; the next command goes through
        oled.send_command(0xAE).unwrap();
        assert_eq!(rig.writes(), vec![vec![0xAE]]);
    }
}
