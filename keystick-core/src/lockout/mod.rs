//! Escalating lockout after repeated failed attempts
//!
//! The policy only computes decisions. Waiting out a lockout is the
//! firmware's job.

pub mod policy;

pub use policy::{LockoutDecision, LockoutPolicy};
