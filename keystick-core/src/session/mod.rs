//! Access control session
//!
//! Defines the authoritative runtime behavior of the lock. The state
//! machine is explicit, finite, and deterministic; all mutable state is
//! owned by a single [`SessionContext`] driven by the control loop.

pub mod context;
pub mod events;
pub mod machine;

pub use context::{SessionContext, TickInput};
pub use events::Event;
pub use machine::SessionPhase;
