//! Poll-loop aggregate wiring the components together.
//!
//! [`ClockController`] owns one wall clock, one alarm, one debouncer per
//! button and one reporter, and runs a complete cooperative loop iteration
//! per [`service`](ClockController::service) call. The caller supplies the
//! raw button samples and the sleep between iterations.

use crate::DEBOUNCE_WINDOW_MILLIS;
use crate::alarm::{Alarm, AlarmEvent, Buzzer};
use crate::clock::WallClock;
use crate::debounce::Debouncer;
use crate::report::{ReportLine, TimeReporter};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{AlarmConfig, Button};

/// A complete alarm-clock controller for a single-threaded poll loop.
///
/// All mutable state lives here and is touched only from the loop that
/// calls [`service`](Self::service), so no locking is needed. If button
/// reads ever move to interrupts, funnel them into a single-consumer
/// queue drained once per iteration instead of calling in concurrently.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `B` - Buzzer implementation type
/// * `T` - Time source implementation type
pub struct ClockController<'t, I: TimeInstant, B: Buzzer, T: TimeSource<I>> {
    clock: WallClock<'t, I, T>,
    alarm: Alarm<B>,
    hour_button: Debouncer<I>,
    minute_button: Debouncer<I>,
    reporter: TimeReporter,
}

impl<'t, I: TimeInstant, B: Buzzer, T: TimeSource<I>> ClockController<'t, I, B, T> {
    /// Creates a controller with the compiled-in defaults: 07:00 alarm,
    /// 24-hour display, default day offset, 200 ms debounce window.
    pub fn new(time_source: &'t T, buzzer: B) -> Self {
        Self::with_settings(
            time_source,
            buzzer,
            AlarmConfig::default(),
            crate::DEFAULT_DAY_OFFSET_SECS,
        )
    }

    /// Creates a controller with an explicit alarm configuration and day
    /// offset.
    pub fn with_settings(
        time_source: &'t T,
        buzzer: B,
        config: AlarmConfig,
        day_offset_secs: u32,
    ) -> Self {
        let window = I::Duration::from_millis(DEBOUNCE_WINDOW_MILLIS);

        Self {
            clock: WallClock::with_day_offset(time_source, day_offset_secs),
            alarm: Alarm::with_config(buzzer, config),
            hour_button: Debouncer::new(window),
            minute_button: Debouncer::new(window),
            reporter: TimeReporter::new(),
        }
    }

    /// Runs one loop iteration: read the clock, evaluate alarm
    /// transitions, debounce and route both button samples, and report
    /// the time if a second has elapsed.
    ///
    /// `hour_pressed` and `minute_pressed` are the logical button states
    /// for this sample; callers translate the active-low electrical reads
    /// at the input boundary.
    ///
    /// # Returns
    /// * `Some(ReportLine)` - print this line, a second has elapsed
    /// * `None` - nothing to print this iteration
    pub fn service(&mut self, hour_pressed: bool, minute_pressed: bool) -> Option<ReportLine> {
        let (_, line) = self.service_with_event(hour_pressed, minute_pressed);
        line
    }

    /// Like [`service`](Self::service), but also surfaces the alarm
    /// transition that occurred this iteration, for callers that want to
    /// log triggers.
    pub fn service_with_event(
        &mut self,
        hour_pressed: bool,
        minute_pressed: bool,
    ) -> (Option<AlarmEvent>, Option<ReportLine>) {
        let reading = self.clock.now();
        let event = self.alarm.service(reading);

        let at = self.clock.instant();
        if self.hour_button.poll(hour_pressed, at).is_some() {
            self.alarm.handle_press(Button::Hour, reading);
        }
        if self.minute_button.poll(minute_pressed, at).is_some() {
            self.alarm.handle_press(Button::Minute, reading);
        }

        let line = self.reporter.poll(reading, self.alarm.config().mode_24h);
        (event, line)
    }

    /// Returns the alarm state machine.
    pub fn alarm(&self) -> &Alarm<B> {
        &self.alarm
    }

    /// Returns the wall clock.
    pub fn clock(&self) -> &WallClock<'t, I, T> {
        &self.clock
    }
}
