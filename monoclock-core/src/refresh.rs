//! Refresh scheduling
//!
//! Decides when the display should be redrawn. The scheduler is polled
//! cooperatively from the main loop with the current tick; it never
//! blocks and owns no timer.
//!
//! The very first poll after bring-up shows the greeting regardless of
//! elapsed time. After that a redraw happens whenever at least one
//! refresh interval has passed since the previous one.

/// Default time between redraws
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 100;

/// Scheduler phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshPhase {
    /// Nothing shown yet
    AwaitingFirstFrame,
    /// Greeting shown; redrawing on the fixed cadence
    SteadyState,
}

/// What the caller should do for this poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshAction {
    /// Draw the greeting and push a frame
    Greeting,
    /// Draw the current time and push a frame
    Redraw,
    /// Nothing to do
    Idle,
}

impl RefreshAction {
    /// Check if this action pushes a frame
    pub fn pushes_frame(&self) -> bool {
        !matches!(self, RefreshAction::Idle)
    }
}

/// First-frame flag and refresh cadence
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshScheduler {
    phase: RefreshPhase,
    /// Tick of the last frame push
    last_refresh_ms: u32,
    interval_ms: u32,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL_MS)
    }
}

impl RefreshScheduler {
    /// Create a scheduler that redraws every `interval_ms`
    pub fn new(interval_ms: u32) -> Self {
        Self {
            phase: RefreshPhase::AwaitingFirstFrame,
            last_refresh_ms: 0,
            interval_ms,
        }
    }

    /// Decide what to do at tick `now_ms`
    ///
    /// Any action other than [`RefreshAction::Idle`] is recorded as done:
    /// if the caller's push fails, the next attempt waits for the next
    /// interval rather than retrying immediately.
    pub fn poll(&mut self, now_ms: u32) -> RefreshAction {
        match self.phase {
            RefreshPhase::AwaitingFirstFrame => {
                self.phase = RefreshPhase::SteadyState;
                self.last_refresh_ms = now_ms;
                RefreshAction::Greeting
            }
            RefreshPhase::SteadyState => {
                if now_ms.wrapping_sub(self.last_refresh_ms) >= self.interval_ms {
                    self.last_refresh_ms = now_ms;
                    RefreshAction::Redraw
                } else {
                    RefreshAction::Idle
                }
            }
        }
    }

    /// Current phase
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    /// Tick of the last frame push
    pub fn last_refresh_ms(&self) -> u32 {
        self.last_refresh_ms
    }

    /// Configured interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_is_greeting() {
        let mut scheduler = RefreshScheduler::default();
        assert_eq!(scheduler.phase(), RefreshPhase::AwaitingFirstFrame);

        // Forced regardless of elapsed time
        assert_eq!(scheduler.poll(0), RefreshAction::Greeting);
        assert_eq!(scheduler.phase(), RefreshPhase::SteadyState);
    }

    #[test]
    fn test_greeting_only_once() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.poll(1000);
        for t in [1000, 1050, 1100, 5000] {
            assert_ne!(scheduler.poll(t), RefreshAction::Greeting);
        }
    }

    #[test]
    fn test_cadence() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.poll(50);

        assert_eq!(scheduler.poll(149), RefreshAction::Idle);
        assert_eq!(scheduler.poll(150), RefreshAction::Redraw);
        assert_eq!(scheduler.last_refresh_ms(), 150);
        assert_eq!(scheduler.poll(200), RefreshAction::Idle);
        assert_eq!(scheduler.poll(300), RefreshAction::Redraw);
    }

    #[test]
    fn test_at_most_one_push_per_window() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.poll(0);

        // Poll every millisecond for one second
        let pushes = (1..=1000)
            .map(|t| scheduler.poll(t))
            .filter(RefreshAction::pushes_frame)
            .count();
        assert_eq!(pushes, 10);
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.poll(0);

        // A long stall produces one redraw, not a catch-up burst
        assert_eq!(scheduler.poll(1000), RefreshAction::Redraw);
        assert_eq!(scheduler.poll(1001), RefreshAction::Idle);
    }

    #[test]
    fn test_tick_wraparound() {
        let mut scheduler = RefreshScheduler::default();
        scheduler.poll(u32::MAX - 20);
        assert_eq!(scheduler.poll(u32::MAX), RefreshAction::Idle);
        assert_eq!(scheduler.poll(79), RefreshAction::Redraw);
    }
}
