//! Gesture patterns
//!
//! A pattern is an ordered, fixed-length run of directional symbols. The
//! same type holds the enrolled secret and each authentication attempt.

pub mod matcher;
pub mod store;

pub use matcher::matches;
pub use store::{GesturePattern, Overflow, PATTERN_LEN};
