//! Joystick gesture recognition
//!
//! Turns raw two-axis samples into discrete directional events. A push is
//! only reported once; the stick must come back to center before the next
//! push counts.

pub mod classifier;
pub mod symbol;

pub use classifier::{classify, direction_of, ClassifierState};
pub use symbol::{DirectionalSymbol, RawAxisSample};
