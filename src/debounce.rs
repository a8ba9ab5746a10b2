//! Press-event debouncing for polled push-buttons.
//!
//! A poll loop running every ~100 ms would read one physical press as a
//! burst of increments. [`Debouncer`] converts the raw "currently held
//! down" signal into discrete [`PressEvent`]s, emitting at most one event
//! per quiescent window.

use crate::time::{TimeDuration, TimeInstant};

/// A discrete, debounced button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent;

/// Converts a raw held-down signal into discrete press events.
///
/// After accepting a press the debouncer suppresses further detection
/// until the quiescent window has elapsed. A button held down past the
/// window re-emits, one event per window, which gives hold-to-repeat
/// behavior when stepping through alarm minutes.
///
/// The window is explicit state (last accepted timestamp + duration)
/// rather than a pause in the poll loop, so it is configurable and
/// testable in isolation.
pub struct Debouncer<I: TimeInstant> {
    quiescent: I::Duration,
    last_press: Option<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer with the given quiescent window.
    pub fn new(quiescent: I::Duration) -> Self {
        Self {
            quiescent,
            last_press: None,
        }
    }

    /// Samples the raw button signal at instant `now`.
    ///
    /// `pressed` is the logical signal: callers translate the active-low
    /// electrical read at the input boundary.
    ///
    /// # Returns
    /// * `Some(PressEvent)` - a press was accepted at this sample
    /// * `None` - button released, or still inside the quiescent window
    pub fn poll(&mut self, pressed: bool, now: I) -> Option<PressEvent> {
        if !pressed {
            return None;
        }

        if let Some(last) = self.last_press {
            if now.duration_since(last).as_millis() < self.quiescent.as_millis() {
                return None;
            }
        }

        self.last_press = Some(now);
        Some(PressEvent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock Duration type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestDuration(u64);

    impl TimeDuration for TestDuration {
        const ZERO: Self = TestDuration(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            TestDuration(millis)
        }
    }

    // Mock Instant type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }
    }

    #[test]
    fn first_press_emits_immediately() {
        let mut debouncer = Debouncer::new(TestDuration(200));
        assert_eq!(debouncer.poll(true, TestInstant(0)), Some(PressEvent));
    }

    #[test]
    fn released_button_emits_nothing() {
        let mut debouncer = Debouncer::new(TestDuration(200));
        assert_eq!(debouncer.poll(false, TestInstant(0)), None);
        assert_eq!(debouncer.poll(false, TestInstant(100)), None);
    }

    #[test]
    fn held_button_emits_one_event_per_window_not_one_per_poll() {
        // Held low for 500 ms, polled every 100 ms, 200 ms window:
        // events accepted at t=0, t=200 and t=400 only.
        let mut debouncer = Debouncer::new(TestDuration(200));

        let mut events = 0;
        for t in (0..=500).step_by(100) {
            if debouncer.poll(true, TestInstant(t)).is_some() {
                events += 1;
            }
        }

        assert_eq!(events, 3);
    }

    #[test]
    fn repress_inside_window_is_suppressed() {
        let mut debouncer = Debouncer::new(TestDuration(200));

        assert!(debouncer.poll(true, TestInstant(0)).is_some());
        assert_eq!(debouncer.poll(false, TestInstant(50)), None);
        // Contact bounce: re-asserted 100 ms after the accepted press.
        assert_eq!(debouncer.poll(true, TestInstant(100)), None);
    }

    #[test]
    fn press_after_window_elapses_is_accepted() {
        let mut debouncer = Debouncer::new(TestDuration(200));

        assert!(debouncer.poll(true, TestInstant(0)).is_some());
        assert_eq!(debouncer.poll(false, TestInstant(100)), None);
        assert!(debouncer.poll(true, TestInstant(200)).is_some());
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let mut debouncer = Debouncer::new(TestDuration(200));

        assert!(debouncer.poll(true, TestInstant(0)).is_some());
        assert_eq!(debouncer.poll(true, TestInstant(199)), None);
        assert!(debouncer.poll(true, TestInstant(200)).is_some());
    }
}
