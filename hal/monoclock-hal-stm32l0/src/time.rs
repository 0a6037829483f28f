//! Millisecond clock backed by `embassy-time`

use embassy_time::{block_for, Duration, Instant};
use monoclock_hal::Clock;

/// Monotonic clock on the embassy time driver
///
/// Delays busy-wait; the display stack only delays during bring-up.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
