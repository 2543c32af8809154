//! I2C master adapter
//!
//! Any blocking `embedded-hal` 1.0 I2C implementation (including
//! `embassy_rp::i2c::I2c<'_, _, Blocking>`) can drive the display.

use keystick_hal::I2cBus;

/// Adapter from an `embedded-hal` I2C bus
pub struct HalI2c<T>(T);

impl<T> HalI2c<T> {
    pub fn new(bus: T) -> Self {
        Self(bus)
    }
}

impl<T: embedded_hal::i2c::I2c> I2cBus for HalI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), T::Error> {
        embedded_hal::i2c::I2c::write(&mut self.0, address, data)
    }
}
