//! Alarm state machine with buzzer control.
//!
//! Provides [`Alarm`] which owns the alarm configuration, decides when to
//! trigger, snooze and re-ring, and commands the buzzer. Also defines the
//! [`Buzzer`] trait for hardware abstraction.
//!
//! The machine keeps two independent deadlines: the configured alarm
//! target and the snooze deadline. Snoozing never rewrites the configured
//! target, so the originally scheduled time stays available for display
//! throughout a morning of deferrals.

use crate::SNOOZE_INTERVAL_SECS;
use crate::clock::ClockReading;
use crate::types::{AlarmConfig, Button};

/// Trait for abstracting the buzzer hardware.
///
/// Implement this for your sounder (PWM channel, GPIO-driven piezo, etc.).
/// `set` must be idempotent: commanding a level that is already applied
/// just re-asserts the output. Handle any hardware errors internally -
/// this method cannot fail.
pub trait Buzzer {
    /// Turns the sounder on or off.
    fn set(&mut self, on: bool);
}

/// The current state of the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Armed but not yet fired. Configuration is editable, buzzer is off.
    Idle,

    /// Ringing. Buzzer is on until a snooze request arrives.
    Triggered,

    /// Snoozed. Buzzer is off until the snooze deadline passes.
    Snoozed,
}

/// Transition reported by a service cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmEvent {
    /// The wall clock reached the configured target. Buzzer turned on.
    Triggered,

    /// The snooze deadline passed. Buzzer turned back on.
    SnoozeExpired,
}

/// How a button press was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressAction {
    /// Alarm hour advanced by one.
    HourAdvanced,

    /// Alarm minute advanced by one.
    MinuteAdvanced,

    /// Ringing deferred by the snooze interval.
    Snoozed,

    /// Press had no effect in the current state.
    Ignored,
}

/// Errors that can occur during alarm operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmError {
    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of the expected state(s).
        expected: &'static str,
        /// The actual current state.
        actual: AlarmState,
    },
}

impl core::fmt::Display for AlarmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AlarmError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but alarm is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlarmError {}

/// The alarm state machine.
///
/// Owns the alarm configuration and the buzzer, and is driven by two
/// inputs: wall-clock readings fed to [`service`](Self::service) once per
/// poll cycle, and debounced button presses fed to
/// [`handle_press`](Self::handle_press).
///
/// The commanded buzzer level is cached; the actuator is only called when
/// the level actually changes.
///
/// # Type Parameters
/// * `B` - Buzzer implementation type
pub struct Alarm<B: Buzzer> {
    buzzer: B,
    config: AlarmConfig,
    state: AlarmState,
    target_secs: u32,
    snooze_deadline: Option<u32>,
    snooze_interval_secs: u32,
    buzzer_on: bool,
}

impl<B: Buzzer> Alarm<B> {
    /// Creates an idle alarm with the default 07:00 configuration and the
    /// buzzer turned off.
    pub fn new(mut buzzer: B) -> Self {
        buzzer.set(false);
        let config = AlarmConfig::default();

        Self {
            buzzer,
            config,
            state: AlarmState::Idle,
            target_secs: config.target_secs(),
            snooze_deadline: None,
            snooze_interval_secs: SNOOZE_INTERVAL_SECS,
            buzzer_on: false,
        }
    }

    /// Creates an idle alarm with an explicit configuration.
    pub fn with_config(buzzer: B, config: AlarmConfig) -> Self {
        let mut alarm = Self::new(buzzer);
        alarm.config = config;
        alarm.target_secs = config.target_secs();
        alarm
    }

    /// Evaluates time-driven transitions for the current poll cycle.
    ///
    /// # Returns
    /// * `Some(AlarmEvent)` - a transition occurred at this reading
    /// * `None` - nothing changed
    pub fn service(&mut self, now: ClockReading) -> Option<AlarmEvent> {
        match self.state {
            AlarmState::Idle => {
                if now.second_of_day() >= self.target_secs {
                    self.state = AlarmState::Triggered;
                    self.command_buzzer(true);
                    return Some(AlarmEvent::Triggered);
                }
                None
            }
            // Rings until someone asks for a deferral.
            AlarmState::Triggered => None,
            AlarmState::Snoozed => {
                let deadline = self.snooze_deadline?;
                if now.as_secs() >= deadline {
                    self.state = AlarmState::Triggered;
                    self.snooze_deadline = None;
                    self.command_buzzer(true);
                    return Some(AlarmEvent::SnoozeExpired);
                }
                None
            }
        }
    }

    /// Interprets a debounced button press in the current state.
    ///
    /// While `Idle` the buttons edit the configuration; the target is
    /// recomputed on every edit. Once the alarm has fired the
    /// configuration is frozen: the minute button becomes the snooze
    /// request and the hour button is ignored.
    pub fn handle_press(&mut self, button: Button, now: ClockReading) -> PressAction {
        match (self.state, button) {
            (AlarmState::Idle, Button::Hour) => {
                self.config.advance_hour();
                self.target_secs = self.config.target_secs();
                PressAction::HourAdvanced
            }
            (AlarmState::Idle, Button::Minute) => {
                self.config.advance_minute();
                self.target_secs = self.config.target_secs();
                PressAction::MinuteAdvanced
            }
            (AlarmState::Triggered, Button::Minute) => {
                self.enter_snooze(now);
                PressAction::Snoozed
            }
            (AlarmState::Triggered, Button::Hour) => PressAction::Ignored,
            (AlarmState::Snoozed, _) => PressAction::Ignored,
        }
    }

    /// Defers the ringing alarm by the snooze interval.
    ///
    /// Must be called from `Triggered` state. Silences the buzzer and
    /// schedules it to resume at `now + interval`; the configured alarm
    /// target is untouched.
    pub fn snooze(&mut self, now: ClockReading) -> Result<(), AlarmError> {
        if self.state != AlarmState::Triggered {
            return Err(AlarmError::InvalidState {
                expected: "Triggered",
                actual: self.state,
            });
        }

        self.enter_snooze(now);
        Ok(())
    }

    fn enter_snooze(&mut self, now: ClockReading) {
        // Deadline on the raw second count, so snoozing across midnight
        // still waits the full interval.
        self.snooze_deadline = Some(now.as_secs() + self.snooze_interval_secs);
        self.state = AlarmState::Snoozed;
        self.command_buzzer(false);
    }

    fn command_buzzer(&mut self, on: bool) {
        if on != self.buzzer_on {
            self.buzzer.set(on);
            self.buzzer_on = on;
        }
    }

    /// Returns the current state of the alarm.
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Returns the committed configuration.
    pub fn config(&self) -> AlarmConfig {
        self.config
    }

    /// The second-of-day at which the alarm fires.
    pub fn target_secs(&self) -> u32 {
        self.target_secs
    }

    /// The pending snooze deadline on the raw second scale, if snoozed.
    pub fn snooze_deadline(&self) -> Option<u32> {
        self.snooze_deadline
    }

    /// Returns true if the buzzer is currently commanded on.
    pub fn is_buzzer_on(&self) -> bool {
        self.buzzer_on
    }

    /// Returns true if the alarm is currently ringing.
    pub fn is_ringing(&self) -> bool {
        self.state == AlarmState::Triggered
    }
}
