//! Embassy async tasks
//!
//! The lock is a single control loop, so there is only one task.

pub mod controller;

pub use controller::controller_task;
