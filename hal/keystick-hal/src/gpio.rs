//! GPIO pin abstractions
//!
//! Digital input and output pins, plus the polarity needed to turn an
//! electrical level into a logical "asserted" state.

/// Electrical level that means "asserted"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Asserted when the pin is high
    #[default]
    ActiveHigh,
    /// Asserted when the pin is low (pull-up buttons, sinking LEDs)
    ActiveLow,
}

impl Polarity {
    /// Map an electrical level to a logical state
    pub fn is_asserted(self, high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => high,
            Polarity::ActiveLow => !high,
        }
    }

    /// Electrical level for a logical state
    pub fn level_for(self, asserted: bool) -> bool {
        self.is_asserted(asserted)
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Check if the pin is asserted under the given polarity
    fn is_asserted(&self, polarity: Polarity) -> bool {
        polarity.is_asserted(self.is_high())
    }
}
