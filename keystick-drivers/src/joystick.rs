//! Analog joystick with two trigger buttons
//!
//! The stick is read through two ADC channels. Buttons are plain digital
//! inputs, normally wired to ground with the internal pull-up enabled
//! (pressed = low).

use keystick_core::config::JoystickConfig;
use keystick_core::gesture::RawAxisSample;
use keystick_core::traits::{InputError, JoystickInput, Trigger};
use keystick_hal::{AdcReader, InputPin, Polarity};

/// Wiring of a joystick board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickPins {
    /// ADC channel of the horizontal axis
    pub x_channel: u8,
    /// ADC channel of the vertical axis
    pub y_channel: u8,
    /// Button polarity
    pub buttons: Polarity,
}

/// Joystick driver
pub struct AnalogJoystick<A, E, U> {
    adc: A,
    enroll: E,
    auth: U,
    pins: JoystickPins,
}

impl<A, E, U> AnalogJoystick<A, E, U>
where
    A: AdcReader,
    E: InputPin,
    U: InputPin,
{
    /// Create a new joystick driver
    ///
    /// # Arguments
    /// - `adc`: Converter with both axis channels enabled
    /// - `enroll`: Enroll trigger button
    /// - `auth`: Authenticate trigger button
    pub fn new(adc: A, enroll: E, auth: U, pins: JoystickPins) -> Self {
        Self {
            adc,
            enroll,
            auth,
            pins,
        }
    }

    /// Check that every direction can be reached with `config`
    ///
    /// A center or threshold that pushes `center ± threshold` outside the
    /// converter's range makes one or more gestures impossible to enter.
    pub fn supports(config: &JoystickConfig) -> bool {
        let full_scale = u32::from(A::full_scale());
        let center = u32::from(config.center);
        let threshold = u32::from(config.threshold);
        center > threshold && center + threshold < full_scale
    }
}

impl<A, E, U> JoystickInput for AnalogJoystick<A, E, U>
where
    A: AdcReader,
    E: InputPin,
    U: InputPin,
{
    fn read_axes(&mut self) -> Result<RawAxisSample, InputError> {
        let x = self
            .adc
            .read(self.pins.x_channel)
            .map_err(|_| InputError::Conversion)?;
        let y = self
            .adc
            .read(self.pins.y_channel)
            .map_err(|_| InputError::Conversion)?;
        Ok(RawAxisSample::new(x, y))
    }

    fn read_trigger(&mut self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Enroll => self.enroll.is_asserted(self.pins.buttons),
            Trigger::Authenticate => self.auth.is_asserted(self.pins.buttons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAdc, MockInput};

    const PINS: JoystickPins = JoystickPins {
        x_channel: 1,
        y_channel: 0,
        buttons: Polarity::ActiveLow,
    };

    #[test]
    fn test_axes_use_configured_channels() {
        let adc = MockAdc {
            readings: [Some(100), Some(3900), None, None],
        };
        let mut joystick =
            AnalogJoystick::new(adc, MockInput::new(true), MockInput::new(true), PINS);
        assert_eq!(joystick.read_axes(), Ok(RawAxisSample::new(3900, 100)));
    }

    type TestJoystick = AnalogJoystick<MockAdc, MockInput, MockInput>;

    #[test]
    fn test_supports_default_config() {
        assert!(TestJoystick::supports(&JoystickConfig::default()));
    }

    #[test]
    fn test_rejects_unreachable_directions() {
        // RIGHT would need a reading above 4095
        let wide = JoystickConfig {
            center: 2048,
            threshold: 2100,
        };
        assert!(!TestJoystick::supports(&wide));

        // LEFT would need a reading below 0
        let low_center = JoystickConfig {
            center: 900,
            threshold: 1000,
        };
        assert!(!TestJoystick::supports(&low_center));
    }

    #[test]
    fn test_conversion_failure() {
        let adc = MockAdc {
            readings: [Some(2048), None, None, None],
        };
        let mut joystick =
            AnalogJoystick::new(adc, MockInput::new(true), MockInput::new(true), PINS);
        assert_eq!(joystick.read_axes(), Err(InputError::Conversion));
    }

    #[test]
    fn test_active_low_buttons() {
        let adc = MockAdc {
            readings: [Some(2048); 4],
        };
        let enroll = MockInput::new(true);
        let auth = MockInput::new(true);
        let mut joystick = AnalogJoystick::new(adc, enroll.clone(), auth.clone(), PINS);

        assert!(!joystick.read_trigger(Trigger::Enroll));
        assert!(!joystick.read_trigger(Trigger::Authenticate));

        enroll.level.set(false);
        assert!(joystick.read_trigger(Trigger::Enroll));
        assert!(!joystick.read_trigger(Trigger::Authenticate));

        auth.level.set(false);
        assert!(joystick.read_trigger(Trigger::Authenticate));
    }
}
