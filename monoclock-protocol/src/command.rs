//! SSD1306 command set
//!
//! Opcodes follow the SSD1306 datasheet. Commands with arguments are
//! encoded as the opcode followed by their argument bytes.

/// Raw opcodes
pub mod op {
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Charge pump argument: enabled, recommended drive level
pub const CHARGE_PUMP_ON: u8 = 0x14;
/// Charge pump argument: disabled (external VCC)
pub const CHARGE_PUMP_OFF: u8 = 0x10;

/// GDDRAM addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddressingMode {
    /// Column pointer wraps into the next page (used for full-frame pushes)
    Horizontal = 0x00,
    Vertical = 0x01,
    Page = 0x02,
}

/// COM output scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComScanDirection {
    /// COM0 to COM[N-1]
    Incrementing,
    /// COM[N-1] to COM0
    Decrementing,
}

/// A single controller command with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    DisplayOff,
    DisplayOn,
    /// Divide ratio (low nibble) and oscillator frequency (high nibble)
    ClockDivider(u8),
    /// Number of active rows minus one
    MultiplexRatio(u8),
    DisplayOffset(u8),
    /// RAM row mapped to COM0 (0-63)
    StartLine(u8),
    ChargePump(bool),
    MemoryMode(AddressingMode),
    /// `true` maps column 127 to SEG0
    SegmentRemap(bool),
    ComScan(ComScanDirection),
    ComPins(u8),
    Contrast(u8),
    Precharge(u8),
    VcomDeselect(u8),
    /// `false` resumes output from RAM, `true` lights every pixel
    EntireDisplayOn(bool),
    /// `false` is normal, `true` is inverted
    Invert(bool),
    /// Column write window, inclusive
    ColumnAddress { start: u8, end: u8 },
    /// Page write window, inclusive
    PageAddress { start: u8, end: u8 },
}

impl Command {
    /// Encode the command into its wire bytes
    pub fn encode(&self) -> Encoded {
        match *self {
            Command::DisplayOff => Encoded::one(op::DISPLAY_OFF),
            Command::DisplayOn => Encoded::one(op::DISPLAY_ON),
            Command::ClockDivider(v) => Encoded::two(op::SET_CLOCK_DIV, v),
            Command::MultiplexRatio(v) => Encoded::two(op::SET_MUX_RATIO, v),
            Command::DisplayOffset(v) => Encoded::two(op::SET_DISPLAY_OFFSET, v),
            Command::StartLine(line) => Encoded::one(op::SET_START_LINE | (line & 0x3F)),
            Command::ChargePump(on) => Encoded::two(
                op::SET_CHARGE_PUMP,
                if on { CHARGE_PUMP_ON } else { CHARGE_PUMP_OFF },
            ),
            Command::MemoryMode(mode) => Encoded::two(op::SET_MEMORY_MODE, mode as u8),
            Command::SegmentRemap(remap) => Encoded::one(op::SET_SEG_REMAP | remap as u8),
            Command::ComScan(ComScanDirection::Incrementing) => Encoded::one(op::SET_COM_SCAN_INC),
            Command::ComScan(ComScanDirection::Decrementing) => Encoded::one(op::SET_COM_SCAN_DEC),
            Command::ComPins(v) => Encoded::two(op::SET_COM_PINS, v),
            Command::Contrast(v) => Encoded::two(op::SET_CONTRAST, v),
            Command::Precharge(v) => Encoded::two(op::SET_PRECHARGE, v),
            Command::VcomDeselect(v) => Encoded::two(op::SET_VCOM_DETECT, v),
            Command::EntireDisplayOn(on) => Encoded::one(op::ENTIRE_DISPLAY_RESUME | on as u8),
            Command::Invert(inverted) => Encoded::one(op::SET_NORMAL | inverted as u8),
            Command::ColumnAddress { start, end } => {
                Encoded::three(op::SET_COLUMN_ADDR, start, end)
            }
            Command::PageAddress { start, end } => Encoded::three(op::SET_PAGE_ADDR, start, end),
        }
    }
}

/// Wire bytes of one command (1-3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    bytes: [u8; 3],
    len: u8,
}

impl Encoded {
    const fn one(opcode: u8) -> Self {
        Self {
            bytes: [opcode, 0, 0],
            len: 1,
        }
    }

    const fn two(opcode: u8, arg: u8) -> Self {
        Self {
            bytes: [opcode, arg, 0],
            len: 2,
        }
    }

    const fn three(opcode: u8, a: u8, b: u8) -> Self {
        Self {
            bytes: [opcode, a, b],
            len: 3,
        }
    }

    /// The encoded bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The opcode byte
    pub fn opcode(&self) -> u8 {
        self.bytes[0]
    }
}

impl core::ops::Deref for Encoded {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}
