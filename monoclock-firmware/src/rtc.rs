//! Software real-time clock
//!
//! Counts wall-clock time from a fixed start time using the embassy
//! monotonic clock. Time is lost on reset.

use embassy_time::Instant;
use monoclock_core::time::{ClockTime, TimeSource, TimeText, SECONDS_PER_DAY};

pub struct SoftRtc {
    start: ClockTime,
    boot: Instant,
}

impl SoftRtc {
    /// Start counting from `start` now
    pub fn new(start: ClockTime) -> Self {
        Self {
            start,
            boot: Instant::now(),
        }
    }

    /// Current time of day
    pub fn now(&self) -> ClockTime {
        let elapsed = self.boot.elapsed().as_secs() % SECONDS_PER_DAY as u64;
        self.start.plus_seconds(elapsed as u32)
    }
}

impl TimeSource for SoftRtc {
    fn current_time(&mut self) -> TimeText {
        self.now().format()
    }
}
