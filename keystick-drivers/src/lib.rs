//! Peripheral drivers for the gesture lock
//!
//! Each driver implements one of the collaborator traits from
//! `keystick_core::traits` on top of the `keystick-hal` abstractions:
//!
//! - Analog joystick with enroll/authenticate buttons
//! - Green/red status LEDs
//! - PWM buzzer
//! - SSD1306 OLED text display (I2C)

#![cfg_attr(not(test), no_std)]

pub mod buzzer;
pub mod display;
pub mod joystick;
pub mod leds;

pub use buzzer::PwmBuzzer;
pub use display::Ssd1306;
pub use joystick::{AnalogJoystick, JoystickPins};
pub use leds::StatusLeds;

#[cfg(test)]
mod mock;
