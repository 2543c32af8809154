//! Green/red status LEDs

use keystick_core::traits::StatusIndicator;
use keystick_hal::{OutputPin, Polarity};

/// Pair of status LEDs on GPIO pins
pub struct StatusLeds<G, R> {
    green: G,
    red: R,
    polarity: Polarity,
}

impl<G: OutputPin, R: OutputPin> StatusLeds<G, R> {
    /// Create the driver with both LEDs off
    pub fn new(green: G, red: R, polarity: Polarity) -> Self {
        let mut leds = Self {
            green,
            red,
            polarity,
        };
        leds.set_indicator(false, false);
        leds
    }

    /// Check if the green LED is lit
    pub fn is_green_on(&self) -> bool {
        self.polarity.is_asserted(self.green.is_set_high())
    }

    /// Check if the red LED is lit
    pub fn is_red_on(&self) -> bool {
        self.polarity.is_asserted(self.red.is_set_high())
    }
}

impl<G: OutputPin, R: OutputPin> StatusIndicator for StatusLeds<G, R> {
    fn set_indicator(&mut self, green: bool, red: bool) {
        self.green.set_state(self.polarity.level_for(green));
        self.red.set_state(self.polarity.level_for(red));
    }
}
