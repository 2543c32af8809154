//! Mock peripherals for host tests

use core::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use keystick_hal::{AdcReader, I2cBus, InputPin, OutputPin, PwmOutput};

/// Output pin that remembers its level
#[derive(Default)]
pub struct MockOutput {
    pub high: bool,
}

impl OutputPin for MockOutput {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin whose level is shared with the test
#[derive(Clone, Default)]
pub struct MockInput {
    pub level: Rc<Cell<bool>>,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(high)),
        }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}

/// 12-bit ADC returning fixed readings per channel
pub struct MockAdc {
    pub readings: [Option<u16>; 4],
}

impl AdcReader for MockAdc {
    type Error = ();

    const RESOLUTION_BITS: u8 = 12;

    fn read(&mut self, channel: u8) -> Result<u16, ()> {
        self.readings
            .get(channel as usize)
            .copied()
            .flatten()
            .ok_or(())
    }
}

/// PWM channel recording its duty
pub struct MockPwm {
    pub duty: u16,
    pub top: u16,
}

impl PwmOutput for MockPwm {
    fn max_duty(&self) -> u16 {
        self.top
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty.min(self.top);
    }
}

/// I2C bus recording every write
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl I2cBus for MockI2c {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }
}
