//! Minimal TOML parser for lock configuration
//!
//! Handles only the subset used by `lock.toml`. It does NOT support the
//! full TOML grammar.
//!
//! Supported features:
//! - `[joystick]`, `[lockout]` and `[timing]` section headers
//! - `key = integer` pairs, with optional `_` digit separators
//! - Comments (# ...), on their own line or trailing a value
//!
//! Keys that are absent keep their default value. Unknown sections or keys
//! are rejected so that typos do not silently fall back to defaults.

use super::types::{ConfigError, LockConfig};

/// What went wrong while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Malformed section header
    InvalidSection,
    /// Section name not recognised
    UnknownSection,
    /// Key not recognised in the current section
    UnknownKey,
    /// Line is neither a header nor `key = value`
    MissingValue,
    /// Value is not a non-negative integer in range
    InvalidValue,
    /// Parsed values violate a configuration invariant
    Invalid(ConfigError),
}

/// Parse error with the 1-based line it occurred on
///
/// `line` is 0 for errors found after the whole input was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Joystick,
    Lockout,
    Timing,
}

/// Parse TOML configuration into LockConfig
pub fn parse_config(input: &str) -> Result<LockConfig, ParseError> {
    let mut config = LockConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let fail = |kind| ParseError {
            line: line_no,
            kind,
        };

        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header
                .strip_suffix(']')
                .ok_or(fail(ParseErrorKind::InvalidSection))?
                .trim();
            section = match name {
                "joystick" => Section::Joystick,
                "lockout" => Section::Lockout,
                "timing" => Section::Timing,
                "" => return Err(fail(ParseErrorKind::InvalidSection)),
                _ => return Err(fail(ParseErrorKind::UnknownSection)),
            };
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .ok_or(fail(ParseErrorKind::MissingValue))?;
        let (key, value) = (key.trim(), value.trim());
        if value.is_empty() {
            return Err(fail(ParseErrorKind::MissingValue));
        }

        apply_key(&mut config, section, key, value).map_err(fail)?;
    }

    config.validate().map_err(|e| ParseError {
        line: 0,
        kind: ParseErrorKind::Invalid(e),
    })?;

    Ok(config)
}

/// Store one `key = value` pair into the section's fields
fn apply_key(
    config: &mut LockConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseErrorKind> {
    match section {
        Section::Root => Err(ParseErrorKind::UnknownKey),
        Section::Joystick => {
            let joystick = &mut config.joystick;
            match key {
                "center" => joystick.center = parse_int(value)?,
                "threshold" => joystick.threshold = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
            Ok(())
        }
        Section::Lockout => {
            let lockout = &mut config.lockout;
            match key {
                "base_ms" => lockout.base_ms = parse_int(value)?,
                "factor" => lockout.factor = parse_int(value)?,
                "max_failures" => lockout.max_failures = parse_int(value)?,
                "max_ms" => lockout.max_ms = parse_int(value)?,
                _ => return Err(ParseErrorKind::UnknownKey),
            }
            Ok(())
        }
        Section::Timing => {
            let timing = &mut config.timing;
            let field = match key {
                "idle_poll_ms" => &mut timing.idle_poll_ms,
                "capture_poll_ms" => &mut timing.capture_poll_ms,
                "capture_pace_ms" => &mut timing.capture_pace_ms,
                "splash_ms" => &mut timing.splash_ms,
                "prompt_ms" => &mut timing.prompt_ms,
                "result_dwell_ms" => &mut timing.result_dwell_ms,
                "tone_ms" => &mut timing.tone_ms,
                "tone_gap_ms" => &mut timing.tone_gap_ms,
                _ => return Err(ParseErrorKind::UnknownKey),
            };
            *field = parse_int(value)?;
            Ok(())
        }
    }
}

/// Drop a trailing `# comment`
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse a decimal integer that fits in `T`
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseErrorKind> {
    if value.starts_with('_') || value.ends_with('_') {
        return Err(ParseErrorKind::InvalidValue);
    }

    let mut acc: u32 = 0;
    let mut digits = 0;
    for ch in value.chars() {
        if ch == '_' {
            continue;
        }
        let digit = ch.to_digit(10).ok_or(ParseErrorKind::InvalidValue)?;
        acc = acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(ParseErrorKind::InvalidValue)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(ParseErrorKind::InvalidValue);
    }

    T::try_from(acc).map_err(|_| ParseErrorKind::InvalidValue)
}
