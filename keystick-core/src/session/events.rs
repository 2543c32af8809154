//! Events that trigger phase transitions

use crate::gesture::DirectionalSymbol;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Trigger events
    /// Enroll button pressed
    EnrollTrigger,
    /// Authenticate button pressed
    AuthTrigger,

    // Capture events
    /// Classifier reported a new gesture
    Gesture(DirectionalSymbol),

    // Feedback events
    /// The previous feedback's dwell time has elapsed
    FeedbackElapsed,

    // Fault events
    /// Input hardware could not be read
    HardwareFault,
}
