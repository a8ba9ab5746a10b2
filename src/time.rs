//! Time abstraction traits for platform-agnostic timing.
//!
//! The alarm clock never reads hardware timers directly. Implement
//! [`TimeSource`] (and the associated instant/duration types) for your
//! platform's monotonic counter and the rest of the crate works unchanged
//! on hardware and on the host.

/// Trait for abstracting monotonic time sources.
///
/// Returned instants are assumed non-decreasing; the tick counter never
/// runs backwards.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Converts duration to whole elapsed seconds (truncating).
    fn as_secs(&self) -> u64 {
        self.as_millis() / 1000
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
