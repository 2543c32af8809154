//! Board wiring
//!
//! | Function          | Peripheral              |
//! |-------------------|-------------------------|
//! | Joystick Y axis   | ADC0 (GPIO26)           |
//! | Joystick X axis   | ADC1 (GPIO27)           |
//! | Enroll button (A) | GPIO5, pull-up          |
//! | Auth button (B)   | GPIO6, pull-up          |
//! | Green LED         | GPIO11                  |
//! | Red LED           | GPIO13                  |
//! | Buzzer            | GPIO21 (PWM slice 2 B)  |
//! | OLED SDA / SCL    | GPIO14 / GPIO15 (I2C1)  |

use defmt::*;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::Peripherals;

use keystick_drivers::{AnalogJoystick, JoystickPins, PwmBuzzer, Ssd1306, StatusLeds};
use keystick_hal::i2c::I2cConfig;
use keystick_hal::Polarity;
use keystick_hal_rp2040::{AdcInput, GpioInput, GpioOutput, HalI2c, PwmTone, Rp2040Adc};

use crate::controller::LockIo;

/// Buzzer pitch
pub const TONE_HZ: u32 = 100;

pub type BoardJoystick = AnalogJoystick<Rp2040Adc<'static>, GpioInput<'static>, GpioInput<'static>>;
pub type BoardDisplay = Ssd1306<HalI2c<I2c<'static, I2C1, Blocking>>>;
pub type BoardLeds = StatusLeds<GpioOutput<'static>, GpioOutput<'static>>;
pub type BoardBuzzer = PwmBuzzer<PwmTone<'static>>;

/// Every collaborator the controller drives
pub type BoardIo = LockIo<BoardJoystick, BoardDisplay, BoardLeds, BoardBuzzer>;

/// Bring up the peripherals and wrap them in drivers
pub fn init(p: Peripherals) -> BoardIo {
    // Joystick
    let mut adc = Rp2040Adc::new(Adc::new_blocking(p.ADC, adc::Config::default()));
    adc.attach(AdcInput::Gpio26, Channel::new_pin(p.PIN_26, Pull::None));
    adc.attach(AdcInput::Gpio27, Channel::new_pin(p.PIN_27, Pull::None));
    let pins = JoystickPins {
        x_channel: AdcInput::Gpio27.channel(),
        y_channel: AdcInput::Gpio26.channel(),
        buttons: Polarity::ActiveLow,
    };
    let joystick = AnalogJoystick::new(
        adc,
        GpioInput::new(Input::new(p.PIN_5, Pull::Up)),
        GpioInput::new(Input::new(p.PIN_6, Pull::Up)),
        pins,
    );

    // Status LEDs
    let leds = StatusLeds::new(
        GpioOutput::new(Output::new(p.PIN_11, Level::Low)),
        GpioOutput::new(Output::new(p.PIN_13, Level::Low)),
        Polarity::ActiveHigh,
    );

    // Buzzer
    let pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, pwm::Config::default());
    let buzzer = PwmBuzzer::new(PwmTone::new(pwm, TONE_HZ));

    // OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2cConfig::FAST.frequency;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(HalI2c::new(bus));
    match display.init() {
        Ok(()) => info!("SSD1306 initialized"),
        Err(e) => warn!("SSD1306 init failed: {:?}", e),
    }

    LockIo {
        joystick,
        display,
        leds,
        buzzer,
    }
}
