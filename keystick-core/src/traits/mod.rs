//! Collaborator traits
//!
//! These traits define the interface between the lock logic and the
//! peripherals around it. Implementations live in `keystick-drivers`.

pub mod display;
pub mod input;
pub mod output;

pub use display::{DisplayError, TextDisplay};
pub use input::{InputError, JoystickInput, Trigger};
pub use output::{StatusIndicator, ToneOutput};
