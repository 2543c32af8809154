//! User feedback
//!
//! The state machine reports what the user should see and hear as a
//! [`Feedback`] value. The firmware turns it into display, LED and buzzer
//! activity and waits out its dwell time before the next tick.

pub mod present;
pub mod screen;

use core::fmt::Write;

use heapless::String;

use crate::config::TimingConfig;
use crate::gesture::DirectionalSymbol;
pub use present::{Step, Steps};
pub use screen::{Screen, TextLine, MAX_LINE_LEN, MAX_LINES};

/// Which capture loop produced a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureMode {
    Enroll,
    Authenticate,
}

/// Status light state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Indicator {
    pub green: bool,
    pub red: bool,
}

impl Indicator {
    pub const OFF: Self = Self {
        green: false,
        red: false,
    };
    pub const GREEN: Self = Self {
        green: true,
        red: false,
    };
    pub const RED: Self = Self {
        green: false,
        red: true,
    };

    /// Check if any light is on
    pub fn is_lit(&self) -> bool {
        self.green || self.red
    }
}

/// Something to show the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Feedback {
    /// Boot banner
    Splash,
    /// Waiting for the enroll button
    AwaitEnroll,
    /// Enrollment started
    EnrollPrompt,
    /// A gesture was captured (`index` is 1-based)
    Captured {
        mode: CaptureMode,
        index: u8,
        symbol: DirectionalSymbol,
    },
    /// Enrollment finished
    PatternSaved,
    /// Authentication started
    AuthPrompt,
    /// Attempt matched
    Granted,
    /// Attempt did not match
    Denied { attempts: u8 },
    /// Too many failures; input refused for `duration_ms`
    LockedOut { duration_ms: u32 },
    /// Lockout elapsed
    Unlocked,
    /// Back to waiting for the authenticate button after a grant
    Ready,
    /// Input hardware failed mid-capture
    Fault,
}

impl Feedback {
    /// Text to display
    pub fn screen(&self) -> Screen {
        match *self {
            Feedback::Splash => Screen::two("Access", "Control"),
            Feedback::AwaitEnroll => Screen::two("Press A", "To Start"),
            Feedback::EnrollPrompt => Screen::two("Define pattern", "of 6 moves"),
            Feedback::Captured {
                mode: CaptureMode::Enroll,
                index,
                symbol,
            } => {
                let mut title: String<MAX_LINE_LEN> = String::new();
                let _ = write!(title, "Move {}", index);
                Screen::two(&title, symbol.as_str())
            }
            Feedback::Captured {
                mode: CaptureMode::Authenticate,
                symbol,
                ..
            } => Screen::two("Authenticate", symbol.as_str()),
            Feedback::PatternSaved => Screen::two("Pattern Saved", "Press B"),
            Feedback::AuthPrompt => Screen::two("Authenticate", "Move Joystick"),
            Feedback::Granted => Screen::two("Access", "Granted"),
            Feedback::Denied { attempts } => {
                let mut count: String<MAX_LINE_LEN> = String::new();
                let _ = write!(count, "Attempts: {}", attempts);
                Screen::three("Denied", &count, "Press B")
            }
            Feedback::LockedOut { duration_ms } => {
                let mut wait: String<MAX_LINE_LEN> = String::new();
                let _ = write!(wait, "{} seconds", duration_ms / 1000);
                Screen::three("Wait", "Locked for", &wait)
            }
            Feedback::Unlocked => Screen::three("Commands", "Unlocked", "Press B"),
            Feedback::Ready => Screen::two("Pattern Set", "Press B"),
            Feedback::Fault => Screen::two("Hardware", "Fault"),
        }
    }

    /// Status lights while the feedback is shown
    ///
    /// Lights are switched off again once the dwell time has elapsed.
    pub fn indicator(&self) -> Indicator {
        match self {
            Feedback::Granted => Indicator::GREEN,
            Feedback::Denied { .. } | Feedback::LockedOut { .. } | Feedback::Fault => {
                Indicator::RED
            }
            _ => Indicator::OFF,
        }
    }

    /// Buzzer tone length, if any
    pub fn tone_ms(&self, timing: &TimingConfig) -> Option<u32> {
        match self {
            Feedback::Granted | Feedback::Denied { .. } => Some(timing.tone_ms),
            _ => None,
        }
    }

    /// Time to hold the feedback before sampling input again
    pub fn dwell_ms(&self, timing: &TimingConfig) -> u32 {
        match *self {
            Feedback::Splash => timing.splash_ms,
            Feedback::AwaitEnroll => timing.prompt_ms,
            Feedback::Captured { .. } => timing.capture_pace_ms,
            Feedback::Granted | Feedback::Denied { .. } | Feedback::Fault => {
                timing.result_dwell_ms
            }
            Feedback::LockedOut { duration_ms } => duration_ms,
            _ => 0,
        }
    }
}
