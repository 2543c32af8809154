//! Presentation order
//!
//! Turns a [`Feedback`] into the ordered output actions the firmware
//! performs after drawing its screen: lights on, tone then a silent gap,
//! the dwell wait, lights off again.

use heapless::Vec;

use super::{Feedback, Indicator};
use crate::config::TimingConfig;

/// Longest action list (lights, tone on/wait/off/gap, dwell, lights off)
pub const MAX_STEPS: usize = 7;

/// One output action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Set the status lights
    Lights(Indicator),
    /// Start or stop the buzzer
    Tone(bool),
    /// Wait before the next step (ms)
    Wait(u32),
}

/// Ordered actions for one feedback
pub type Steps = Vec<Step, MAX_STEPS>;

impl Feedback {
    /// Output actions to perform once the screen is shown
    pub fn steps(&self, timing: &TimingConfig) -> Steps {
        let mut steps = Steps::new();
        let indicator = self.indicator();

        // Capacity covers every branch below
        let _ = steps.push(Step::Lights(indicator));
        if let Some(tone_ms) = self.tone_ms(timing) {
            let _ = steps.push(Step::Tone(true));
            let _ = steps.push(Step::Wait(tone_ms));
            let _ = steps.push(Step::Tone(false));
            let _ = steps.push(Step::Wait(timing.tone_gap_ms));
        }
        let dwell_ms = self.dwell_ms(timing);
        if dwell_ms > 0 {
            let _ = steps.push(Step::Wait(dwell_ms));
        }
        if indicator.is_lit() {
            let _ = steps.push(Step::Lights(Indicator::OFF));
        }

        steps
    }
}
