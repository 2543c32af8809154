//! Joystick and trigger input

use crate::gesture::RawAxisSample;

/// Errors reading the joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// ADC conversion failed
    Conversion,
}

/// Discrete trigger buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Starts pattern enrollment
    Enroll,
    /// Starts an authentication attempt
    Authenticate,
}

/// Two-axis joystick with trigger buttons
pub trait JoystickInput {
    /// Sample both axes
    ///
    /// Takes `&mut self` because ADC reads require mutable access.
    fn read_axes(&mut self) -> Result<RawAxisSample, InputError>;

    /// Check if a trigger is currently pressed
    fn read_trigger(&mut self, trigger: Trigger) -> bool;
}
