//! Configuration type definitions

/// Joystick classification parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// ADC reading with the stick at rest
    pub center: u16,
    /// Deflection from center needed to register a direction
    pub threshold: u16,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            center: 1 << 11, // Midpoint of the 12-bit range
            threshold: 1000,
        }
    }
}

/// Lockout escalation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockoutConfig {
    /// Duration of the first lockout (ms)
    pub base_ms: u32,
    /// Multiplier applied to each subsequent lockout
    pub factor: u32,
    /// Consecutive failures that trigger a lockout
    pub max_failures: u8,
    /// Ceiling on the lockout duration (ms)
    pub max_ms: u32,
}

impl Default for LockoutConfig {
    fn default() -> Self {
        Self {
            base_ms: 2000,
            factor: 4,
            max_failures: 3,
            max_ms: u32::MAX,
        }
    }
}

/// Pacing and feedback durations, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Poll interval while waiting for a trigger
    pub idle_poll_ms: u32,
    /// Poll interval while capturing gestures
    pub capture_poll_ms: u32,
    /// Pause after each captured gesture
    pub capture_pace_ms: u32,
    /// Boot splash screen
    pub splash_ms: u32,
    /// "Press A" prompt after boot
    pub prompt_ms: u32,
    /// Granted/denied result screen
    pub result_dwell_ms: u32,
    /// Buzzer tone on granted/denied
    pub tone_ms: u32,
    /// Silence after each tone
    pub tone_gap_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            idle_poll_ms: 100,
            capture_poll_ms: 10,
            capture_pace_ms: 400,
            splash_ms: 3000,
            prompt_ms: 1000,
            result_dwell_ms: 2000,
            tone_ms: 2000,
            tone_gap_ms: 100,
        }
    }
}

/// Semantic configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Threshold of zero would classify noise as gestures
    ZeroThreshold,
    /// Lockout factor below 1 would shrink lockouts
    InvalidFactor,
    /// At least one failure must be allowed
    ZeroMaxFailures,
    /// Ceiling below the base duration
    MaxBelowBase,
    /// Poll intervals must be non-zero
    ZeroPollInterval,
}

/// Complete lock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockConfig {
    pub joystick: JoystickConfig,
    pub lockout: LockoutConfig,
    pub timing: TimingConfig,
}

impl LockConfig {
    /// Check values that would break the lock's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.joystick.threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.lockout.factor == 0 {
            return Err(ConfigError::InvalidFactor);
        }
        if self.lockout.max_failures == 0 {
            return Err(ConfigError::ZeroMaxFailures);
        }
        if self.lockout.max_ms < self.lockout.base_ms {
            return Err(ConfigError::MaxBelowBase);
        }
        if self.timing.idle_poll_ms == 0 || self.timing.capture_poll_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
