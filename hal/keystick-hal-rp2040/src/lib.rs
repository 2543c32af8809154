//! RP2040-specific HAL for the gesture lock firmware
//!
//! This crate implements the `keystick-hal` traits on top of `embassy-rp`:
//! - ADC channel management (joystick axes)
//! - GPIO input/output wrappers (buttons, LEDs)
//! - PWM tone output (buzzer)
//! - Blocking I2C master (OLED display)

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;

pub use adc::{AdcError, AdcInput, Rp2040Adc};
pub use gpio::{GpioInput, GpioOutput};
pub use i2c::HalI2c;
pub use pwm::PwmTone;
