//! Core value types for alarm configuration.

/// The two physical push-buttons on the clock face.
///
/// Their meaning depends on the alarm state: while the alarm is armed they
/// edit the configured time, while it is ringing the minute button becomes
/// the snooze request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Advances the configured alarm hour.
    Hour,

    /// Advances the configured alarm minute; doubles as snooze while ringing.
    Minute,
}

/// The user-configurable alarm settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmConfig {
    /// Alarm hour, 0-23.
    pub hour: u8,

    /// Alarm minute, 0-59.
    pub minute: u8,

    /// Display and hour-entry mode: true for 24-hour, false for 12-hour.
    pub mode_24h: bool,
}

impl AlarmConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// * `HourOutOfRange` - hour is not within 0-23
    /// * `MinuteOutOfRange` - minute is not within 0-59
    pub fn new(hour: u8, minute: u8, mode_24h: bool) -> Result<Self, ConfigError> {
        if hour > 23 {
            return Err(ConfigError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ConfigError::MinuteOutOfRange(minute));
        }

        Ok(Self {
            hour,
            minute,
            mode_24h,
        })
    }

    /// The second-of-day at which the alarm should fire.
    pub fn target_secs(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60
    }

    /// Advances the hour by one, wrapping modulo 24 in 24-hour mode and
    /// modulo 12 in 12-hour mode.
    pub fn advance_hour(&mut self) {
        let modulus = if self.mode_24h { 24 } else { 12 };
        self.hour = (self.hour + 1) % modulus;
    }

    /// Advances the minute by one, wrapping modulo 60.
    pub fn advance_minute(&mut self) {
        self.minute = (self.minute + 1) % 60;
    }
}

impl Default for AlarmConfig {
    /// The compiled-in default: 07:00, 24-hour display.
    fn default() -> Self {
        Self {
            hour: 7,
            minute: 0,
            mode_24h: true,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hour outside 0-23.
    HourOutOfRange(u8),

    /// Minute outside 0-59.
    MinuteOutOfRange(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::HourOutOfRange(hour) => {
                write!(f, "alarm hour {} is outside 0-23", hour)
            }
            ConfigError::MinuteOutOfRange(minute) => {
                write!(f, "alarm minute {} is outside 0-59", minute)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
