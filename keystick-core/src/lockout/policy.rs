//! Lockout policy implementation

use crate::config::LockoutConfig;

/// Outcome of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockoutDecision {
    /// Keep accepting attempts
    NoAction,
    /// Refuse all input for `duration_ms`
    EnterLockout { duration_ms: u32 },
}

/// Failure tracking with multiplicative lockout escalation
///
/// Lockout count and duration survive successful attempts: a device that
/// has been locked before locks longer next time, until power is cycled.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LockoutPolicy {
    config: LockoutConfig,
    /// Failures since the last success or lockout
    consecutive_failures: u8,
    /// Lockouts entered since boot
    lockout_count: u32,
    /// Duration of the most recent lockout (or the base before the first)
    lockout_duration_ms: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self::new(LockoutConfig::default())
    }
}

impl LockoutPolicy {
    /// Create a policy with no failures recorded
    pub fn new(config: LockoutConfig) -> Self {
        Self {
            consecutive_failures: 0,
            lockout_count: 0,
            lockout_duration_ms: config.base_ms.min(config.max_ms),
            config,
        }
    }

    /// Record a failed attempt
    pub fn record_failure(&mut self) -> LockoutDecision {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);

        if self.consecutive_failures < self.config.max_failures {
            return LockoutDecision::NoAction;
        }

        self.consecutive_failures = 0;
        self.lockout_count = self.lockout_count.saturating_add(1);

        // The first lockout uses the base duration as-is
        if self.lockout_count > 1 {
            self.lockout_duration_ms = self
                .lockout_duration_ms
                .saturating_mul(self.config.factor)
                .min(self.config.max_ms);
        }

        LockoutDecision::EnterLockout {
            duration_ms: self.lockout_duration_ms,
        }
    }

    /// Record a successful attempt
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Failures since the last success or lockout
    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive_failures
    }

    /// Lockouts entered since boot
    pub fn lockout_count(&self) -> u32 {
        self.lockout_count
    }

    /// Duration of the most recent lockout
    pub fn lockout_duration_ms(&self) -> u32 {
        self.lockout_duration_ms
    }
}
