//! Time-of-day text
//!
//! The display only ever shows wall-clock time as `HH:MM:SS`. Whatever
//! keeps the time (RTC peripheral, software counter) hands it over through
//! [`TimeSource`].

use core::fmt::Write;

use heapless::String;

/// Length of `HH:MM:SS`
pub const TIME_TEXT_LEN: usize = 8;

/// Formatted `HH:MM:SS` text
pub type TimeText = String<TIME_TEXT_LEN>;

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Provider of the current time of day
pub trait TimeSource {
    /// Current time as `HH:MM:SS`
    fn current_time(&mut self) -> TimeText;
}

/// 24-hour time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Midnight
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time, `None` if any field is out of range
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < 24 && minutes < 60 && seconds < 60 {
            Some(Self {
                hours,
                minutes,
                seconds,
            })
        } else {
            None
        }
    }

    /// Time of day `seconds` after midnight, wrapping at 24 hours
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let s = seconds % SECONDS_PER_DAY;
        Self {
            hours: (s / 3600) as u8,
            minutes: (s / 60 % 60) as u8,
            seconds: (s % 60) as u8,
        }
    }

    /// Seconds since midnight
    pub const fn seconds_of_day(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// This time advanced by `seconds`, wrapping at midnight
    pub const fn plus_seconds(&self, seconds: u32) -> Self {
        Self::from_seconds_of_day(self.seconds_of_day() + seconds % SECONDS_PER_DAY)
    }

    pub const fn hours(&self) -> u8 {
        self.hours
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Format as zero-padded `HH:MM:SS`
    pub fn format(&self) -> TimeText {
        let mut text = TimeText::new();
        // Fields are range-checked, so eight bytes always suffice
        let _ = write!(
            text,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        );
        text
    }
}

impl TimeSource for ClockTime {
    fn current_time(&mut self) -> TimeText {
        self.format()
    }
}
