//! Status lights and buzzer

use crate::feedback::Indicator;

/// Green/red status lights
pub trait StatusIndicator {
    /// Switch both lights
    fn set_indicator(&mut self, green: bool, red: bool);

    /// Apply an [`Indicator`] state
    fn apply(&mut self, indicator: Indicator) {
        self.set_indicator(indicator.green, indicator.red);
    }

    /// Switch both lights off
    fn off(&mut self) {
        self.set_indicator(false, false);
    }
}

/// Audible cue generator
///
/// Timing is handled by the caller; this only starts and stops the tone.
pub trait ToneOutput {
    /// Start or stop the tone
    fn set_tone(&mut self, on: bool);
}
