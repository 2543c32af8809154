//! Lock controller
//!
//! Drives a [`SessionContext`] with real peripherals: gathers one tick of
//! input, presents the resulting feedback and paces the loop. The session
//! itself never waits; every delay the user sees happens here.

use defmt::*;
use embassy_time::Timer;

use keystick_core::config::TimingConfig;
use keystick_core::feedback::{Feedback, Step};
use keystick_core::session::{SessionContext, TickInput};
use keystick_core::traits::{
    InputError, JoystickInput, StatusIndicator, TextDisplay, ToneOutput, Trigger,
};

/// Peripherals around the lock
pub struct LockIo<J, D, L, T> {
    pub joystick: J,
    pub display: D,
    pub leds: L,
    pub buzzer: T,
}

impl<J, D, L, T> LockIo<J, D, L, T>
where
    J: JoystickInput,
    D: TextDisplay,
    L: StatusIndicator,
    T: ToneOutput,
{
    /// Read the inputs the session needs for its next tick
    ///
    /// Axes are only converted while a gesture capture is running.
    pub fn sample(&mut self, ctx: &SessionContext) -> Result<TickInput, InputError> {
        let sample = if ctx.wants_sample() {
            Some(self.joystick.read_axes()?)
        } else {
            None
        };

        Ok(TickInput {
            sample,
            enroll_pressed: self.joystick.read_trigger(Trigger::Enroll),
            auth_pressed: self.joystick.read_trigger(Trigger::Authenticate),
        })
    }

    /// Show feedback, then perform its lights, tone and dwell in order
    pub async fn present(&mut self, feedback: &Feedback, timing: &TimingConfig) {
        if let Err(e) = self.display.show(&feedback.screen()) {
            warn!("Display update failed: {:?}", e);
        }

        for step in feedback.steps(timing) {
            match step {
                Step::Lights(indicator) => self.leds.apply(indicator),
                Step::Tone(on) => self.buzzer.set_tone(on),
                Step::Wait(ms) => Timer::after_millis(u64::from(ms)).await,
            }
        }
    }
}

/// Run the lock forever
pub async fn run<J, D, L, T>(mut ctx: SessionContext, io: &mut LockIo<J, D, L, T>)
where
    J: JoystickInput,
    D: TextDisplay,
    L: StatusIndicator,
    T: ToneOutput,
{
    let timing = ctx.config().timing;

    for feedback in ctx.boot() {
        io.present(&feedback, &timing).await;
    }
    info!("Waiting for enrollment");
    let mut last_phase = ctx.phase().name();

    loop {
        let feedback = match io.sample(&ctx) {
            Ok(input) => ctx.tick(input),
            Err(e) => {
                error!("Joystick read failed: {:?}", e);
                ctx.fault()
            }
        };

        if let Some(feedback) = feedback {
            log_feedback(&feedback);
            io.present(&feedback, &timing).await;
        }

        let phase = ctx.phase().name();
        if phase != last_phase {
            debug!("Phase: {} -> {}", last_phase, phase);
            last_phase = phase;
        }

        Timer::after_millis(u64::from(ctx.poll_interval_ms())).await;
    }
}

fn log_feedback(feedback: &Feedback) {
    match *feedback {
        Feedback::PatternSaved => info!("Pattern enrolled"),
        Feedback::Granted => info!("Access granted"),
        Feedback::Denied { attempts } => warn!("Access denied ({} consecutive)", attempts),
        Feedback::LockedOut { duration_ms } => warn!("Locked out for {}ms", duration_ms),
        Feedback::Unlocked => info!("Lockout elapsed"),
        Feedback::Fault => error!("Capture aborted by hardware fault"),
        other => debug!("Feedback: {:?}", other),
    }
}
