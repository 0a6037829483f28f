//! Time source abstraction
//!
//! All waits in the display stack are expressed against this trait so
//! that host tests can advance time deterministically.

/// Check whether a wait of `elapsed_ms` has used up `timeout_ms`
///
/// A wait times out as soon as the elapsed time reaches the timeout.
pub const fn timed_out(elapsed_ms: u64, timeout_ms: u32) -> bool {
    elapsed_ms >= timeout_ms as u64
}

/// Monotonic millisecond clock with a blocking delay
pub trait Clock {
    /// Milliseconds elapsed since boot
    ///
    /// Wraps at `u32::MAX`; consumers compare ticks with `wrapping_sub`.
    fn now_ms(&self) -> u32;

    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Milliseconds elapsed since `since`
    fn elapsed_ms(&self, since: u32) -> u32 {
        self.now_ms().wrapping_sub(since)
    }
}
