//! PWM tone output
//!
//! One slice output running a fixed wrap. The pitch comes from the
//! slice's clock divider, which is an 8.4 fixed-point value capped at
//! 255; very low pitches saturate to the slowest the divider allows.

use embassy_rp::pwm::{Config, Pwm};
use fixed::types::U12F4;
use keystick_hal::PwmOutput;

/// Counter wrap (12-bit resolution)
pub const DEFAULT_TOP: u16 = 4095;

/// Largest integer clock divider
const MAX_DIVIDER: u32 = 255;

/// Integer clock divider for a tone
///
/// One PWM period spans `top + 1` counter ticks.
pub fn clock_divider(sys_hz: u32, tone_hz: u32, top: u16) -> u16 {
    let ticks = (u32::from(top) + 1).saturating_mul(tone_hz.max(1));
    (sys_hz / ticks).clamp(1, MAX_DIVIDER) as u16
}

/// PWM channel B output driving a buzzer
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> PwmTone<'d> {
    /// Configure the slice for `tone_hz` with the output held low
    ///
    /// `pwm` must come from `Pwm::new_output_b`.
    pub fn new(mut pwm: Pwm<'d>, tone_hz: u32) -> Self {
        let sys_hz = embassy_rp::clocks::clk_sys_freq();

        let mut config = Config::default();
        config.top = DEFAULT_TOP;
        config.compare_b = 0;
        config.divider = U12F4::from_num(clock_divider(sys_hz, tone_hz, DEFAULT_TOP));
        pwm.set_config(&config);

        Self { pwm, config }
    }
}

impl PwmOutput for PwmTone<'_> {
    fn max_duty(&self) -> u16 {
        self.config.top
    }

    fn set_duty(&mut self, duty: u16) {
        self.config.compare_b = duty.min(self.config.top);
        self.pwm.set_config(&self.config);
    }
}
