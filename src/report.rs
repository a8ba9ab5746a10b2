//! Time formatting and once-per-second reporting.
//!
//! Rendering is pure; [`TimeReporter`] adds the edge trigger on the second
//! boundary so the poll loop emits one line per elapsed second rather than
//! one per iteration.

use core::fmt::Write;

use crate::clock::ClockReading;

/// Capacity of a formatted report line, in bytes.
///
/// The longest rendering is `hh:MM:SS PM` at 11 bytes.
pub const REPORT_LINE_CAPACITY: usize = 16;

/// A formatted time line, without trailing newline.
pub type ReportLine = heapless::String<REPORT_LINE_CAPACITY>;

/// Renders a reading as `HH:MM:SS` (24-hour) or `hh:MM:SS [A|P]M`
/// (12-hour).
///
/// In 12-hour mode, hour 0 displays as 12, hours 13-23 as hour minus 12,
/// and the period is AM for hours below 12.
pub fn format_time(reading: ClockReading, mode_24h: bool) -> ReportLine {
    let mut line = ReportLine::new();

    if mode_24h {
        let _ = write!(
            line,
            "{:02}:{:02}:{:02}",
            reading.hour(),
            reading.minute(),
            reading.second()
        );
    } else {
        let hour = reading.hour();
        let period = if hour < 12 { 'A' } else { 'P' };
        let hour_12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let _ = write!(
            line,
            "{:02}:{:02}:{:02} {}M",
            hour_12,
            reading.minute(),
            reading.second(),
            period
        );
    }

    line
}

/// Emits a formatted time line at most once per whole elapsed second.
#[derive(Default)]
pub struct TimeReporter {
    last_reported_secs: Option<u32>,
}

impl TimeReporter {
    /// Creates a reporter that fires on its first poll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls the reporter with the current reading.
    ///
    /// # Returns
    /// * `Some(ReportLine)` - a whole second has elapsed since the last
    ///   report (or this is the first poll)
    /// * `None` - still within the already-reported second
    pub fn poll(&mut self, reading: ClockReading, mode_24h: bool) -> Option<ReportLine> {
        let secs = reading.as_secs();

        if let Some(last) = self.last_reported_secs {
            if secs < last + 1 {
                return None;
            }
        }

        self.last_reported_secs = Some(secs);
        Some(format_time(reading, mode_24h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(h: u32, m: u32, s: u32) -> ClockReading {
        ClockReading::from_secs(h * 3600 + m * 60 + s)
    }

    #[test]
    fn formats_24h() {
        assert_eq!(format_time(reading(7, 0, 5), true).as_str(), "07:00:05");
        assert_eq!(format_time(reading(23, 59, 59), true).as_str(), "23:59:59");
        assert_eq!(format_time(reading(0, 0, 0), true).as_str(), "00:00:00");
    }

    #[test]
    fn midnight_hour_displays_as_twelve_am() {
        assert_eq!(format_time(reading(0, 15, 0), false).as_str(), "12:15:00 AM");
    }

    #[test]
    fn afternoon_hours_fold_into_twelve_hour_range() {
        assert_eq!(format_time(reading(13, 0, 0), false).as_str(), "01:00:00 PM");
        assert_eq!(format_time(reading(23, 5, 9), false).as_str(), "11:05:09 PM");
    }

    #[test]
    fn noon_displays_as_twelve_pm() {
        assert_eq!(format_time(reading(12, 0, 0), false).as_str(), "12:00:00 PM");
    }

    #[test]
    fn morning_hours_keep_their_value() {
        assert_eq!(format_time(reading(7, 30, 0), false).as_str(), "07:30:00 AM");
        assert_eq!(format_time(reading(11, 59, 59), false).as_str(), "11:59:59 AM");
    }

    #[test]
    fn reporter_fires_on_first_poll() {
        let mut reporter = TimeReporter::new();
        assert!(reporter.poll(reading(7, 0, 0), true).is_some());
    }

    #[test]
    fn reporter_emits_once_per_second() {
        let mut reporter = TimeReporter::new();

        assert!(reporter.poll(reading(7, 0, 0), true).is_some());
        // Same wall-clock second, repeated polls.
        assert!(reporter.poll(reading(7, 0, 0), true).is_none());
        assert!(reporter.poll(reading(7, 0, 0), true).is_none());

        let line = reporter.poll(reading(7, 0, 1), true);
        assert_eq!(line.unwrap().as_str(), "07:00:01");
    }

    #[test]
    fn reporter_catches_up_after_skipped_seconds() {
        let mut reporter = TimeReporter::new();
        reporter.poll(reading(7, 0, 0), true);

        // Poll loop stalled for three seconds: one line, not three.
        let line = reporter.poll(reading(7, 0, 3), true);
        assert_eq!(line.unwrap().as_str(), "07:00:03");
        assert!(reporter.poll(reading(7, 0, 3), true).is_none());
    }

    #[test]
    fn reporter_respects_display_mode() {
        let mut reporter = TimeReporter::new();
        let line = reporter.poll(reading(14, 0, 0), false);
        assert_eq!(line.unwrap().as_str(), "02:00:00 PM");
    }
}
