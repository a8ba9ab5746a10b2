//! Wall-clock derivation from a monotonic tick source.
//!
//! Provides [`WallClock`] which converts elapsed time since construction
//! into a calendar-of-day second count, applying a fixed day offset. This
//! is the only place the day offset is applied; everything downstream
//! works on [`ClockReading`] values.

use crate::DEFAULT_DAY_OFFSET_SECS;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Seconds in one 24-hour day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A wall-clock sample: seconds since the epoch the day offset establishes.
///
/// Readings are monotonically non-decreasing for the life of the process.
/// The 24-hour wraparound is applied on decomposition ([`hour`](Self::hour),
/// [`second_of_day`](Self::second_of_day)), never to the stored value, so
/// ordering comparisons between readings stay valid across midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading(u32);

impl ClockReading {
    /// Creates a reading from a raw second count.
    pub fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// The raw, monotonic second count.
    pub fn as_secs(self) -> u32 {
        self.0
    }

    /// The position within the current day, 0..86400.
    pub fn second_of_day(self) -> u32 {
        self.0 % SECONDS_PER_DAY
    }

    /// The hour of day, 0-23.
    pub fn hour(self) -> u8 {
        ((self.0 / 3600) % 24) as u8
    }

    /// The minute within the hour, 0-59.
    pub fn minute(self) -> u8 {
        ((self.0 / 60) % 60) as u8
    }

    /// The second within the minute, 0-59.
    pub fn second(self) -> u8 {
        (self.0 % 60) as u8
    }
}

/// Converts a monotonic time source into wall-clock readings.
///
/// The clock captures the instant it was constructed as its boot reference;
/// [`now`](Self::now) is then a pure function of elapsed ticks plus the
/// configured day offset. No side effects, no failure modes.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct WallClock<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    boot: I,
    day_offset_secs: u32,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> WallClock<'t, I, T> {
    /// Creates a clock with the compiled-in default day offset.
    pub fn new(time_source: &'t T) -> Self {
        Self::with_day_offset(time_source, DEFAULT_DAY_OFFSET_SECS)
    }

    /// Creates a clock whose boot instant maps to `day_offset_secs` on the
    /// wall-clock scale.
    pub fn with_day_offset(time_source: &'t T, day_offset_secs: u32) -> Self {
        Self {
            time_source,
            boot: time_source.now(),
            day_offset_secs,
        }
    }

    /// Returns the current wall-clock reading.
    pub fn now(&self) -> ClockReading {
        let elapsed = self.time_source.now().duration_since(self.boot);
        ClockReading::from_secs(elapsed.as_secs() as u32 + self.day_offset_secs)
    }

    /// Returns the raw instant from the underlying time source.
    ///
    /// Sub-second consumers (the debouncer) need more resolution than a
    /// [`ClockReading`] carries.
    pub fn instant(&self) -> I {
        self.time_source.now()
    }

    /// The configured day offset in seconds.
    pub fn day_offset_secs(&self) -> u32 {
        self.day_offset_secs
    }
}
