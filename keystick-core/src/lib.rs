//! Board-agnostic core logic for the gesture lock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Direction classification of raw joystick samples
//! - Fixed-length gesture patterns and their comparison
//! - Escalating lockout policy
//! - Session state machine driving enrollment and authentication
//! - Feedback (screen, LEDs, tone) descriptions for the I/O layer
//! - Collaborator traits and configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod feedback;
pub mod gesture;
pub mod lockout;
pub mod pattern;
pub mod session;
pub mod traits;
