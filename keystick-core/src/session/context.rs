//! Session context
//!
//! Owns every piece of mutable lock state (classifier, enrolled pattern,
//! lockout policy) and turns one tick of input into at most one piece of
//! feedback. Nothing here sleeps: the caller shows the feedback, waits its
//! dwell time, then ticks again.

use super::events::Event;
use super::machine::SessionPhase;
use crate::config::LockConfig;
use crate::feedback::{CaptureMode, Feedback};
use crate::gesture::{classify, ClassifierState, RawAxisSample};
use crate::lockout::LockoutPolicy;
use crate::pattern::GesturePattern;

/// Input gathered by the control loop for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    /// Joystick position; only sampled while capturing
    pub sample: Option<RawAxisSample>,
    /// Enroll button level (pressed = true)
    pub enroll_pressed: bool,
    /// Authenticate button level (pressed = true)
    pub auth_pressed: bool,
}

/// Complete lock state
pub struct SessionContext {
    config: LockConfig,
    phase: SessionPhase,
    classifier: ClassifierState,
    enrolled: Option<GesturePattern>,
    lockout: LockoutPolicy,
}

impl SessionContext {
    /// Create a fresh session: nothing enrolled, no failures
    pub fn new(config: LockConfig) -> Self {
        Self {
            phase: SessionPhase::AwaitingEnrollTrigger,
            classifier: ClassifierState::new(),
            enrolled: None,
            lockout: LockoutPolicy::new(config.lockout),
            config,
        }
    }

    /// Feedback shown once at power-on, in order
    pub fn boot(&self) -> [Feedback; 2] {
        [Feedback::Splash, Feedback::AwaitEnroll]
    }

    /// Current phase
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Active configuration
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Enrolled secret, once committed
    pub fn enrolled_pattern(&self) -> Option<&GesturePattern> {
        self.enrolled.as_ref()
    }

    /// Lockout policy state
    pub fn lockout(&self) -> &LockoutPolicy {
        &self.lockout
    }

    /// Whether the next tick needs a joystick sample
    ///
    /// A full capture buffer is committed or judged without further input.
    pub fn wants_sample(&self) -> bool {
        self.phase.capture().is_some_and(|pattern| !pattern.is_full())
    }

    /// Delay before the next tick (ms)
    pub fn poll_interval_ms(&self) -> u32 {
        if self.phase.is_capturing() {
            self.config.timing.capture_poll_ms
        } else {
            self.config.timing.idle_poll_ms
        }
    }

    /// Advance the session by one tick
    pub fn tick(&mut self, input: TickInput) -> Option<Feedback> {
        match &self.phase {
            SessionPhase::AwaitingEnrollTrigger => {
                if !input.enroll_pressed {
                    return None;
                }
                self.apply(Event::EnrollTrigger);
                Some(Feedback::EnrollPrompt)
            }
            SessionPhase::EnrolledIdle => {
                if !input.auth_pressed {
                    return None;
                }
                self.apply(Event::AuthTrigger);
                Some(Feedback::AuthPrompt)
            }
            SessionPhase::Enrolling(pattern) | SessionPhase::Authenticating(pattern)
                if pattern.is_full() =>
            {
                self.complete_capture()
            }
            SessionPhase::Enrolling(_) | SessionPhase::Authenticating(_) => {
                self.capture(input.sample?)
            }
            SessionPhase::Granted => {
                self.apply(Event::FeedbackElapsed);
                Some(Feedback::Ready)
            }
            SessionPhase::Denied(_) => {
                self.apply(Event::FeedbackElapsed);
                match self.phase {
                    SessionPhase::LockedOut { duration_ms } => {
                        Some(Feedback::LockedOut { duration_ms })
                    }
                    // Denied screen stays up until the next attempt
                    _ => None,
                }
            }
            SessionPhase::LockedOut { .. } => {
                self.apply(Event::FeedbackElapsed);
                Some(Feedback::Unlocked)
            }
        }
    }

    /// Report that the input hardware could not be read
    ///
    /// Aborts a capture in progress. Outside capture, or once the buffer
    /// is full, nothing changes and no feedback is produced.
    pub fn fault(&mut self) -> Option<Feedback> {
        if !self.wants_sample() {
            return None;
        }
        self.apply(Event::HardwareFault);
        Some(Feedback::Fault)
    }

    fn apply(&mut self, event: Event) {
        let phase = core::mem::replace(&mut self.phase, SessionPhase::EnrolledIdle);
        self.phase = phase.transition(event);
    }

    /// Feed one sample to the classifier during capture
    fn capture(&mut self, sample: RawAxisSample) -> Option<Feedback> {
        let symbol = classify(sample, &mut self.classifier, &self.config.joystick)?;

        let mode = match self.phase {
            SessionPhase::Enrolling(_) => CaptureMode::Enroll,
            _ => CaptureMode::Authenticate,
        };
        self.apply(Event::Gesture(symbol));

        let index = self.phase.capture().map_or(0, |p| p.len() as u8);
        Some(Feedback::Captured {
            mode,
            index,
            symbol,
        })
    }

    /// Commit an enrollment or judge an attempt once the buffer is full
    fn complete_capture(&mut self) -> Option<Feedback> {
        let phase = core::mem::replace(&mut self.phase, SessionPhase::EnrolledIdle);

        match phase {
            SessionPhase::Enrolling(pattern) => {
                self.enrolled = Some(pattern);
                Some(Feedback::PatternSaved)
            }
            SessionPhase::Authenticating(attempt) => {
                let granted = self
                    .enrolled
                    .as_ref()
                    .is_some_and(|enrolled| enrolled.matches(&attempt));

                if granted {
                    self.lockout.record_success();
                    self.phase = SessionPhase::Granted;
                    Some(Feedback::Granted)
                } else {
                    let attempts = self.lockout.consecutive_failures().saturating_add(1);
                    let decision = self.lockout.record_failure();
                    self.phase = SessionPhase::Denied(decision);
                    Some(Feedback::Denied { attempts })
                }
            }
            other => {
                self.phase = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::DirectionalSymbol::{self, *};
    use crate::lockout::LockoutDecision;
    use crate::pattern::PATTERN_LEN;

    const SECRET: [DirectionalSymbol; PATTERN_LEN] = [Right, Right, Left, Up, Down, Right];
    const WRONG: [DirectionalSymbol; PATTERN_LEN] = [Right, Left, Left, Up, Down, Right];

    fn sample_for(symbol: DirectionalSymbol) -> RawAxisSample {
        match symbol {
            Center => RawAxisSample::new(2048, 2048),
            Up => RawAxisSample::new(2048, 4095),
            Down => RawAxisSample::new(2048, 0),
            Left => RawAxisSample::new(0, 2048),
            Right => RawAxisSample::new(4095, 2048),
        }
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn press_enroll() -> TickInput {
        TickInput {
            enroll_pressed: true,
            ..TickInput::default()
        }
    }

    fn press_auth() -> TickInput {
        TickInput {
            auth_pressed: true,
            ..TickInput::default()
        }
    }

    fn stick(symbol: DirectionalSymbol) -> TickInput {
        TickInput {
            sample: Some(sample_for(symbol)),
            ..TickInput::default()
        }
    }

    /// Center the stick, then push it in each direction, collecting feedback
    fn gesture_sequence(ctx: &mut SessionContext, symbols: &[DirectionalSymbol]) -> Vec<Feedback> {
        let mut out = Vec::new();
        for &symbol in symbols {
            out.extend(ctx.tick(stick(Center)));
            out.extend(ctx.tick(stick(symbol)));
        }
        out
    }

    fn enrolled(secret: &[DirectionalSymbol]) -> SessionContext {
        let mut ctx = SessionContext::new(LockConfig::default());
        assert_eq!(ctx.tick(press_enroll()), Some(Feedback::EnrollPrompt));
        gesture_sequence(&mut ctx, secret);
        assert_eq!(ctx.tick(idle()), Some(Feedback::PatternSaved));
        ctx
    }

    /// Run one full authentication attempt and return the result feedback
    fn attempt(ctx: &mut SessionContext, symbols: &[DirectionalSymbol]) -> Option<Feedback> {
        assert_eq!(ctx.tick(press_auth()), Some(Feedback::AuthPrompt));
        gesture_sequence(ctx, symbols);
        ctx.tick(idle())
    }

    #[test]
    fn test_boot_feedback() {
        let ctx = SessionContext::new(LockConfig::default());
        assert_eq!(ctx.boot(), [Feedback::Splash, Feedback::AwaitEnroll]);
        assert_eq!(ctx.phase(), &SessionPhase::AwaitingEnrollTrigger);
    }

    #[test]
    fn test_enrollment_captures_pattern() {
        let mut ctx = SessionContext::new(LockConfig::default());
        assert_eq!(ctx.tick(idle()), None);
        assert_eq!(ctx.tick(press_enroll()), Some(Feedback::EnrollPrompt));
        assert!(ctx.wants_sample());

        let feedback = gesture_sequence(&mut ctx, &SECRET);
        assert_eq!(feedback.len(), PATTERN_LEN);
        assert_eq!(
            feedback[0],
            Feedback::Captured {
                mode: CaptureMode::Enroll,
                index: 1,
                symbol: Right
            }
        );
        assert_eq!(
            feedback[5],
            Feedback::Captured {
                mode: CaptureMode::Enroll,
                index: 6,
                symbol: Right
            }
        );

        assert_eq!(ctx.tick(idle()), Some(Feedback::PatternSaved));
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
        assert_eq!(ctx.enrolled_pattern().unwrap().as_slice(), &SECRET);
    }

    #[test]
    fn test_held_stick_counts_once() {
        let mut ctx = SessionContext::new(LockConfig::default());
        ctx.tick(press_enroll());
        assert!(ctx.tick(stick(Up)).is_some());
        for _ in 0..10 {
            assert_eq!(ctx.tick(stick(Up)), None);
        }
        assert_eq!(ctx.phase().capture().unwrap().len(), 1);
    }

    #[test]
    fn test_capture_without_sample_is_quiet() {
        let mut ctx = SessionContext::new(LockConfig::default());
        ctx.tick(press_enroll());
        assert_eq!(ctx.tick(idle()), None);
        assert!(ctx.phase().capture().unwrap().is_empty());
    }

    #[test]
    fn test_matching_attempt_granted() {
        let mut ctx = enrolled(&SECRET);
        assert_eq!(attempt(&mut ctx, &SECRET), Some(Feedback::Granted));
        assert_eq!(ctx.phase(), &SessionPhase::Granted);
        assert_eq!(ctx.tick(idle()), Some(Feedback::Ready));
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
    }

    #[test]
    fn test_wrong_attempt_denied() {
        let mut ctx = enrolled(&SECRET);
        assert_eq!(
            attempt(&mut ctx, &WRONG),
            Some(Feedback::Denied { attempts: 1 })
        );
        assert_eq!(ctx.lockout().consecutive_failures(), 1);
        assert_eq!(ctx.tick(idle()), None);
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
    }

    #[test]
    fn test_three_failures_lock_out() {
        let mut ctx = enrolled(&SECRET);
        for n in 1..=3 {
            assert_eq!(
                attempt(&mut ctx, &WRONG),
                Some(Feedback::Denied { attempts: n })
            );
            if n < 3 {
                assert_eq!(ctx.tick(idle()), None);
            }
        }

        assert_eq!(
            ctx.phase(),
            &SessionPhase::Denied(LockoutDecision::EnterLockout { duration_ms: 2000 })
        );
        assert_eq!(
            ctx.tick(idle()),
            Some(Feedback::LockedOut { duration_ms: 2000 })
        );
        assert!(ctx.phase().is_locked_out());

        // Authenticate button is ignored while locked: the next tick just unlocks
        assert_eq!(ctx.tick(press_auth()), Some(Feedback::Unlocked));
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
        assert_eq!(ctx.lockout().consecutive_failures(), 0);
    }

    #[test]
    fn test_lockout_escalates_across_sessions() {
        let mut ctx = enrolled(&SECRET);
        let mut durations = Vec::new();

        for _ in 0..3 {
            for _ in 0..3 {
                attempt(&mut ctx, &WRONG);
                if let Some(Feedback::LockedOut { duration_ms }) = ctx.tick(idle()) {
                    durations.push(duration_ms);
                    assert_eq!(ctx.tick(idle()), Some(Feedback::Unlocked));
                }
            }
        }

        assert_eq!(durations, [2000, 8000, 32000]);
    }

    #[test]
    fn test_success_resets_failures_not_escalation() {
        let mut ctx = enrolled(&SECRET);

        // First lockout
        for _ in 0..3 {
            attempt(&mut ctx, &WRONG);
            ctx.tick(idle());
        }
        assert_eq!(ctx.tick(idle()), Some(Feedback::Unlocked));

        attempt(&mut ctx, &WRONG);
        ctx.tick(idle());
        assert_eq!(ctx.lockout().consecutive_failures(), 1);

        assert_eq!(attempt(&mut ctx, &SECRET), Some(Feedback::Granted));
        ctx.tick(idle());
        assert_eq!(ctx.lockout().consecutive_failures(), 0);
        assert_eq!(ctx.lockout().lockout_count(), 1);

        // Three more failures lock for base x 4
        for i in 0..3 {
            attempt(&mut ctx, &WRONG);
            if i < 2 {
                ctx.tick(idle());
            }
        }
        assert_eq!(
            ctx.tick(idle()),
            Some(Feedback::LockedOut { duration_ms: 8000 })
        );
    }

    #[test]
    fn test_enroll_button_ignored_after_enrollment() {
        let mut ctx = enrolled(&SECRET);
        assert_eq!(ctx.tick(press_enroll()), None);
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
        assert_eq!(ctx.enrolled_pattern().unwrap().as_slice(), &SECRET);
    }

    #[test]
    fn test_auth_button_ignored_before_enrollment() {
        let mut ctx = SessionContext::new(LockConfig::default());
        assert_eq!(ctx.tick(press_auth()), None);
        assert_eq!(ctx.phase(), &SessionPhase::AwaitingEnrollTrigger);
    }

    #[test]
    fn test_fault_during_enrollment() {
        let mut ctx = SessionContext::new(LockConfig::default());
        ctx.tick(press_enroll());
        gesture_sequence(&mut ctx, &SECRET[..3]);
        assert_eq!(ctx.fault(), Some(Feedback::Fault));
        assert_eq!(ctx.phase(), &SessionPhase::AwaitingEnrollTrigger);
        assert!(ctx.enrolled_pattern().is_none());
    }

    #[test]
    fn test_fault_during_authentication_keeps_counters() {
        let mut ctx = enrolled(&SECRET);
        attempt(&mut ctx, &WRONG);
        ctx.tick(idle());

        ctx.tick(press_auth());
        gesture_sequence(&mut ctx, &SECRET[..2]);
        assert_eq!(ctx.fault(), Some(Feedback::Fault));
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
        assert_eq!(ctx.lockout().consecutive_failures(), 1);
    }

    #[test]
    fn test_fault_outside_capture_is_ignored() {
        let mut ctx = enrolled(&SECRET);
        assert_eq!(ctx.fault(), None);
        assert_eq!(ctx.phase(), &SessionPhase::EnrolledIdle);
    }

    #[test]
    fn test_full_enrollment_survives_fault() {
        let mut ctx = SessionContext::new(LockConfig::default());
        ctx.tick(press_enroll());
        gesture_sequence(&mut ctx, &SECRET);
        assert!(!ctx.wants_sample());

        assert_eq!(ctx.fault(), None);
        assert_eq!(ctx.tick(idle()), Some(Feedback::PatternSaved));
        assert_eq!(ctx.enrolled_pattern().unwrap().as_slice(), &SECRET);
    }

    #[test]
    fn test_full_attempt_still_judged_after_fault() {
        let mut ctx = enrolled(&SECRET);
        ctx.tick(press_auth());
        gesture_sequence(&mut ctx, &WRONG);
        assert!(!ctx.wants_sample());

        assert_eq!(ctx.fault(), None);
        assert_eq!(ctx.tick(idle()), Some(Feedback::Denied { attempts: 1 }));
        assert_eq!(ctx.lockout().consecutive_failures(), 1);
    }

    #[test]
    fn test_poll_interval_follows_phase() {
        let mut ctx = SessionContext::new(LockConfig::default());
        assert_eq!(ctx.poll_interval_ms(), 100);
        ctx.tick(press_enroll());
        assert_eq!(ctx.poll_interval_ms(), 10);
    }

    #[test]
    fn test_fresh_capture_buffer_each_attempt() {
        let mut ctx = enrolled(&SECRET);
        attempt(&mut ctx, &WRONG);
        ctx.tick(idle());
        ctx.tick(press_auth());
        assert!(ctx.phase().capture().unwrap().is_empty());
    }
}
