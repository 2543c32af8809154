//! Build script for keystick-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted in each section, with their upper bound
const SECTIONS: &[(&str, &[(&str, i64)])] = &[
    (
        "joystick",
        &[("center", u16::MAX as i64), ("threshold", u16::MAX as i64)],
    ),
    (
        "lockout",
        &[
            ("base_ms", u32::MAX as i64),
            ("factor", u32::MAX as i64),
            ("max_failures", u8::MAX as i64),
            ("max_ms", u32::MAX as i64),
        ],
    ),
    (
        "timing",
        &[
            ("idle_poll_ms", u32::MAX as i64),
            ("capture_poll_ms", u32::MAX as i64),
            ("capture_pace_ms", u32::MAX as i64),
            ("splash_ms", u32::MAX as i64),
            ("prompt_ms", u32::MAX as i64),
            ("result_dwell_ms", u32::MAX as i64),
            ("tone_ms", u32::MAX as i64),
            ("tone_gap_ms", u32::MAX as i64),
        ],
    ),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lock.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=lock.toml");

    let config_path = Path::new("lock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: lock.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds lock.toml from the keystick-firmware        ║\n\
            ║  directory. Restore it to build with the default settings.       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read lock.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in lock.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = validate_keys(&config);
    errors.extend(validate_values(&config));
    report("Invalid lock configuration", &errors);

    println!("cargo:warning=lock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fail the build if any errors were collected
fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Check that only known sections and keys are used, with integer values in range
fn validate_keys(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return errors,
    };

    for (name, section) in root {
        let keys = match SECTIONS.iter().find(|(s, _)| s == name) {
            Some((_, keys)) => *keys,
            None => {
                errors.push(format!("unknown section [{}]", name));
                continue;
            }
        };

        let table = match section.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", name));
                continue;
            }
        };

        for (key, value) in table {
            let max = match keys.iter().find(|(k, _)| k == key) {
                Some((_, max)) => *max,
                None => {
                    errors.push(format!("[{}] unknown key '{}'", name, key));
                    continue;
                }
            };
            match value.as_integer() {
                Some(v) if (0..=max).contains(&v) => {}
                Some(_) => errors.push(format!("[{}] {} must be 0-{}", name, key, max)),
                None => errors.push(format!("[{}] {} must be an integer", name, key)),
            }
        }
    }

    errors
}

/// Look up an integer, if present
fn int(config: &toml::Value, section: &str, key: &str) -> Option<i64> {
    config.get(section)?.get(key)?.as_integer()
}

/// Check relations between values
fn validate_values(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    if int(config, "joystick", "threshold") == Some(0) {
        errors.push("[joystick] threshold must be non-zero".to_string());
    }
    if int(config, "lockout", "factor") == Some(0) {
        errors.push("[lockout] factor must be at least 1".to_string());
    }
    if int(config, "lockout", "max_failures") == Some(0) {
        errors.push("[lockout] max_failures must be at least 1".to_string());
    }

    let base = int(config, "lockout", "base_ms").unwrap_or(2_000);
    let max = int(config, "lockout", "max_ms").unwrap_or(u32::MAX as i64);
    if max < base {
        errors.push("[lockout] max_ms must not be below base_ms".to_string());
    }

    for key in ["idle_poll_ms", "capture_poll_ms"] {
        if int(config, "timing", key) == Some(0) {
            errors.push(format!("[timing] {} must be non-zero", key));
        }
    }

    errors
}
