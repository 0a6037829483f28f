//! Controller bring-up sequence
//!
//! The configuration the controller needs after a hardware reset, written
//! as an ordered table of commands rather than a list of magic bytes.

use crate::command::{AddressingMode, ComScanDirection, Command};

/// Number of commands in the bring-up table
pub const INIT_COMMANDS: usize = 16;

/// Physical orientation of the panel
///
/// Segment remap and COM scan direction always change together; flipping
/// only one of them mirrors the image instead of rotating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// Column 127 on SEG0, COM scanned bottom-up
    #[default]
    Standard,
    /// Rotated 180 degrees from [`Orientation::Standard`]
    Flipped,
}

impl Orientation {
    /// Segment-remap and COM-scan commands for this orientation
    pub const fn commands(self) -> (Command, Command) {
        match self {
            Orientation::Standard => (
                Command::SegmentRemap(true),
                Command::ComScan(ComScanDirection::Decrementing),
            ),
            Orientation::Flipped => (
                Command::SegmentRemap(false),
                Command::ComScan(ComScanDirection::Incrementing),
            ),
        }
    }
}

/// Tunable values of the bring-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitParams {
    /// Panel height in rows (32 or 64)
    pub height: u8,
    /// Clock divide ratio / oscillator frequency
    pub clock_divider: u8,
    /// Contrast level
    pub contrast: u8,
    /// Pre-charge period (phase 2 high nibble, phase 1 low nibble)
    pub precharge: u8,
    /// VCOMH deselect level
    pub vcom_deselect: u8,
    /// Panel orientation
    pub orientation: Orientation,
}

impl Default for InitParams {
    fn default() -> Self {
        Self::for_height(32)
    }
}

impl InitParams {
    /// Defaults for a panel of the given height
    pub const fn for_height(height: u8) -> Self {
        Self {
            height,
            clock_divider: 0x80,
            contrast: 0x8F,
            precharge: 0xF1,
            vcom_deselect: 0x40,
            orientation: Orientation::Standard,
        }
    }

    /// COM pin hardware configuration for this height
    ///
    /// 32-row panels wire COM pins sequentially, 64-row panels alternate.
    pub const fn com_pins(&self) -> u8 {
        if self.height > 32 {
            0x12
        } else {
            0x02
        }
    }
}

/// Build the bring-up command table
///
/// Commands are issued in order; each byte goes out as its own command
/// transaction.
pub fn init_sequence(params: &InitParams) -> [Command; INIT_COMMANDS] {
    let (remap, scan) = params.orientation.commands();

    [
        Command::DisplayOff,
        Command::ClockDivider(params.clock_divider),
        Command::MultiplexRatio(params.height.saturating_sub(1)),
        Command::DisplayOffset(0),
        Command::StartLine(0),
        Command::ChargePump(true),
        Command::MemoryMode(AddressingMode::Horizontal),
        remap,
        scan,
        Command::ComPins(params.com_pins()),
        Command::Contrast(params.contrast),
        Command::Precharge(params.precharge),
        Command::VcomDeselect(params.vcom_deselect),
        Command::EntireDisplayOn(false),
        Command::Invert(false),
        Command::DisplayOn,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(commands: &[Command]) -> ([u8; 64], usize) {
        let mut out = [0u8; 64];
        let mut len = 0;
        for c in commands {
            for &b in c.encode().as_slice() {
                out[len] = b;
                len += 1;
            }
        }
        (out, len)
    }

    #[test]
    fn test_reference_sequence_bytes() {
        let seq = init_sequence(&InitParams::default());
        let (bytes, len) = flatten(&seq);

        let expected: &[u8] = &[
            0xAE, // display off
            0xD5, 0x80, // clock divider
            0xA8, 0x1F, // 32 rows
            0xD3, 0x00, // offset
            0x40, // start line
            0x8D, 0x14, // charge pump
            0x20, 0x00, // horizontal addressing
            0xA1, 0xC8, // orientation
            0xDA, 0x02, // COM pins
            0x81, 0x8F, // contrast
            0xD9, 0xF1, // pre-charge
            0xDB, 0x40, // VCOM deselect
            0xA4, // resume from RAM
            0xA6, // normal
            0xAF, // display on
        ];
        assert_eq!(&bytes[..len], expected);
    }

    #[test]
    fn test_flipped_swaps_both_flags() {
        let params = InitParams {
            orientation: Orientation::Flipped,
            ..InitParams::default()
        };
        let seq = init_sequence(&params);
        assert_eq!(seq[7], Command::SegmentRemap(false));
        assert_eq!(seq[8], Command::ComScan(ComScanDirection::Incrementing));
    }

    #[test]
    fn test_tall_panel() {
        let seq = init_sequence(&InitParams::for_height(64));
        assert_eq!(seq[2], Command::MultiplexRatio(63));
        assert_eq!(seq[9], Command::ComPins(0x12));
    }

    #[test]
    fn test_display_on_comes_after_configuration() {
        let seq = init_sequence(&InitParams::default());
        let on = seq.iter().position(|c| *c == Command::DisplayOn);
        assert_eq!(seq[0], Command::DisplayOff);
        assert_eq!(on, Some(INIT_COMMANDS - 1));
    }
}
