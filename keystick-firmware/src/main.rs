//! Keystick - Joystick Gesture Lock Firmware
//!
//! Main firmware binary for RP2040-based boards with an analog joystick,
//! two push buttons, a pair of status LEDs, a buzzer and an SSD1306 OLED.
//!
//! The user enrolls a secret sequence of six joystick pushes, then
//! authenticates by repeating it. Repeated failures lock the device out
//! for an escalating amount of time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod controller;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Keystick firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Embedded lock.toml (or defaults if it is rejected)
    let config = config::load_config();
    if !board::BoardJoystick::supports(&config.joystick) {
        warn!(
            "Joystick center {} +/- {} leaves some directions out of ADC range",
            config.joystick.center, config.joystick.threshold
        );
    }

    let io = board::init(p);
    info!("Board I/O ready");

    unwrap!(spawner.spawn(tasks::controller_task(config, io)));
}
