//! Configuration types
//!
//! Board-agnostic tuning parameters, plus a small parser for the TOML
//! subset used by the firmware's embedded `lock.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError, ParseErrorKind};
pub use types::*;
