//! Configuration loading
//!
//! The lock settings are compiled in from `lock.toml`. build.rs has already
//! checked the file, so a rejection here means it uses something the
//! on-target parser does not accept.

use defmt::*;

use keystick_core::config::{parse_config, LockConfig};

/// Embedded configuration (compiled into firmware)
/// Edit lock.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../lock.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> LockConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: threshold={}, lockout {}ms x{} after {} failures",
                config.joystick.threshold,
                config.lockout.base_ms,
                config.lockout.factor,
                config.lockout.max_failures
            );
            config
        }
        Err(e) => {
            error!(
                "lock.toml rejected at line {}: {:?}, using defaults",
                e.line, e.kind
            );
            LockConfig::default()
        }
    }
}
