//! Address window for full-frame pushes
//!
//! Before streaming pixel data the controller's write pointer is pinned
//! to the whole panel, so a push always starts at column 0 of page 0
//! regardless of where a previous transfer stopped.

use crate::command::Command;

/// Inclusive column/page range the controller writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub first_column: u8,
    pub last_column: u8,
    pub first_page: u8,
    pub last_page: u8,
}

impl AddressWindow {
    /// The two commands that select this window
    pub fn commands(&self) -> [Command; 2] {
        [
            Command::ColumnAddress {
                start: self.first_column,
                end: self.last_column,
            },
            Command::PageAddress {
                start: self.first_page,
                end: self.last_page,
            },
        ]
    }

    /// Number of data bytes that fill the window exactly
    pub fn byte_len(&self) -> usize {
        let columns = (self.last_column - self.first_column) as usize + 1;
        let pages = (self.last_page - self.first_page) as usize + 1;
        columns * pages
    }
}

/// Window covering a whole `width` x `height` panel
///
/// `height` is rounded up to whole 8-row pages.
pub fn frame_window(width: u8, height: u8) -> AddressWindow {
    let pages = height.div_ceil(8).max(1);
    AddressWindow {
        first_column: 0,
        last_column: width.saturating_sub(1),
        first_page: 0,
        last_page: pages - 1,
    }
}
