//! PWM buzzer
//!
//! A passive buzzer driven with a 50% duty square wave; the PWM slice's
//! clock divider sets the pitch.

use keystick_core::traits::ToneOutput;
use keystick_hal::PwmOutput;

/// Buzzer on a PWM channel
pub struct PwmBuzzer<P> {
    pwm: P,
    on: bool,
}

impl<P: PwmOutput> PwmBuzzer<P> {
    /// Create the driver with the buzzer silent
    pub fn new(mut pwm: P) -> Self {
        pwm.disable();
        Self { pwm, on: false }
    }

    /// Check if a tone is playing
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl<P: PwmOutput> ToneOutput for PwmBuzzer<P> {
    fn set_tone(&mut self, on: bool) {
        if on {
            self.pwm.set_half_duty();
        } else {
            self.pwm.disable();
        }
        self.on = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPwm;

    #[test]
    fn test_starts_silent() {
        let buzzer = PwmBuzzer::new(MockPwm {
            duty: 1234,
            top: 4095,
        });
        assert!(!buzzer.is_on());
        assert_eq!(buzzer.pwm.duty, 0);
    }

    #[test]
    fn test_tone_is_half_duty() {
        let mut buzzer = PwmBuzzer::new(MockPwm { duty: 0, top: 4095 });
        buzzer.set_tone(true);
        assert!(buzzer.is_on());
        assert_eq!(buzzer.pwm.duty, 2047);

        buzzer.set_tone(false);
        assert!(!buzzer.is_on());
        assert_eq!(buzzer.pwm.duty, 0);
    }
}
