//! Session phase definition
//!
//! Trigger, gesture, fault and dwell-driven transitions are a pure function
//! of the current phase and an event. Completing a capture needs the
//! enrolled pattern and lockout policy, so that step is handled by
//! [`SessionContext`](super::SessionContext).

use super::events::Event;
use crate::gesture::DirectionalSymbol;
use crate::lockout::LockoutDecision;
use crate::pattern::GesturePattern;

/// Session phases
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionPhase {
    /// No pattern yet, waiting for the enroll button
    AwaitingEnrollTrigger,
    /// Capturing the secret pattern
    Enrolling(GesturePattern),
    /// Pattern enrolled, waiting for the authenticate button
    EnrolledIdle,
    /// Capturing an attempt
    Authenticating(GesturePattern),
    /// Attempt matched
    Granted,
    /// Attempt did not match; the decision says whether to lock next
    Denied(LockoutDecision),
    /// Refusing input until the lockout elapses
    LockedOut { duration_ms: u32 },
}

impl SessionPhase {
    /// Check if gestures are being captured
    pub fn is_capturing(&self) -> bool {
        matches!(
            self,
            SessionPhase::Enrolling(_) | SessionPhase::Authenticating(_)
        )
    }

    /// In-progress capture buffer, if capturing
    pub fn capture(&self) -> Option<&GesturePattern> {
        match self {
            SessionPhase::Enrolling(pattern) | SessionPhase::Authenticating(pattern) => {
                Some(pattern)
            }
            _ => None,
        }
    }

    /// Check if the device is refusing input
    pub fn is_locked_out(&self) -> bool {
        matches!(self, SessionPhase::LockedOut { .. })
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::AwaitingEnrollTrigger => "awaiting-enroll",
            SessionPhase::Enrolling(_) => "enrolling",
            SessionPhase::EnrolledIdle => "idle",
            SessionPhase::Authenticating(_) => "authenticating",
            SessionPhase::Granted => "granted",
            SessionPhase::Denied(_) => "denied",
            SessionPhase::LockedOut { .. } => "locked-out",
        }
    }

    /// Process an event and return the next phase
    ///
    /// Gestures are appended to the capture buffer; a gesture arriving
    /// after the buffer is full is a logic error.
    ///
    /// # Panics
    /// If a gesture is delivered to a full capture buffer.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use SessionPhase::*;

        match (self, event) {
            // Triggers; re-enrollment is not possible once a pattern exists
            (AwaitingEnrollTrigger, EnrollTrigger) => Enrolling(GesturePattern::new()),
            (EnrolledIdle, AuthTrigger) => Authenticating(GesturePattern::new()),

            // Capture
            (Enrolling(pattern), Gesture(symbol)) => Enrolling(append(pattern, symbol)),
            (Authenticating(pattern), Gesture(symbol)) => {
                Authenticating(append(pattern, symbol))
            }

            // Results
            (Granted, FeedbackElapsed) => EnrolledIdle,
            (Denied(LockoutDecision::NoAction), FeedbackElapsed) => EnrolledIdle,
            (Denied(LockoutDecision::EnterLockout { duration_ms }), FeedbackElapsed) => {
                LockedOut { duration_ms }
            }
            (LockedOut { .. }, FeedbackElapsed) => EnrolledIdle,

            // Faults abort the capture in progress
            (Enrolling(_), HardwareFault) => AwaitingEnrollTrigger,
            (Authenticating(_), HardwareFault) => EnrolledIdle,

            // Default: stay in current phase
            (phase, _) => phase,
        }
    }
}

fn append(mut pattern: GesturePattern, symbol: DirectionalSymbol) -> GesturePattern {
    let appended = pattern.append(symbol);
    assert!(appended.is_ok(), "gesture delivered to a full capture buffer");
    pattern
}
