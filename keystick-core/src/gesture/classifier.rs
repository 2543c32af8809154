//! Direction classifier with return-to-center edge detection
//!
//! The stick is classified against a single threshold around the ADC
//! midpoint. X deflection wins over Y deflection when both exceed the
//! threshold.

use super::symbol::{DirectionalSymbol, RawAxisSample};
use crate::config::JoystickConfig;

/// Edge-detection state carried between samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClassifierState {
    /// Direction seen on the most recent sample
    current_symbol: DirectionalSymbol,
    /// Set once the stick has been seen at center; cleared by each event
    awaiting_center_return: bool,
}

impl Default for ClassifierState {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierState {
    /// Fresh state: centered, ready to report the first push
    pub const fn new() -> Self {
        Self {
            current_symbol: DirectionalSymbol::Center,
            awaiting_center_return: true,
        }
    }

    /// Direction seen on the most recent sample
    pub fn current_symbol(&self) -> DirectionalSymbol {
        self.current_symbol
    }

    /// Whether the next deflection will be reported as an event
    pub fn is_armed(&self) -> bool {
        self.awaiting_center_return
    }
}

/// Classify a sample without edge detection
pub fn direction_of(sample: RawAxisSample, config: &JoystickConfig) -> DirectionalSymbol {
    let center = config.center as i32;
    let threshold = config.threshold as i32;

    let delta_x = sample.x as i32 - center;
    let delta_y = sample.y as i32 - center;

    if delta_x > threshold {
        DirectionalSymbol::Right
    } else if delta_x < -threshold {
        DirectionalSymbol::Left
    } else if delta_y > threshold {
        DirectionalSymbol::Up
    } else if delta_y < -threshold {
        DirectionalSymbol::Down
    } else {
        DirectionalSymbol::Center
    }
}

/// Classify a sample and report a new gesture event, if any
///
/// Returns `Some(symbol)` only for the first non-center sample after the
/// stick has been seen at center. A held push yields a single event.
pub fn classify(
    sample: RawAxisSample,
    state: &mut ClassifierState,
    config: &JoystickConfig,
) -> Option<DirectionalSymbol> {
    let symbol = direction_of(sample, config);
    state.current_symbol = symbol;

    if symbol.is_center() {
        state.awaiting_center_return = true;
        return None;
    }

    if state.awaiting_center_return {
        state.awaiting_center_return = false;
        Some(symbol)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CFG: JoystickConfig = JoystickConfig {
        center: 2048,
        threshold: 1000,
    };

    fn sample(x: u16, y: u16) -> RawAxisSample {
        RawAxisSample::new(x, y)
    }

    #[test]
    fn test_directions() {
        assert_eq!(direction_of(sample(2048, 2048), &CFG), DirectionalSymbol::Center);
        assert_eq!(direction_of(sample(4095, 2048), &CFG), DirectionalSymbol::Right);
        assert_eq!(direction_of(sample(0, 2048), &CFG), DirectionalSymbol::Left);
        assert_eq!(direction_of(sample(2048, 4095), &CFG), DirectionalSymbol::Up);
        assert_eq!(direction_of(sample(2048, 0), &CFG), DirectionalSymbol::Down);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly at the threshold stays centered
        assert_eq!(direction_of(sample(3048, 2048), &CFG), DirectionalSymbol::Center);
        assert_eq!(direction_of(sample(3049, 2048), &CFG), DirectionalSymbol::Right);
        assert_eq!(direction_of(sample(1048, 2048), &CFG), DirectionalSymbol::Center);
        assert_eq!(direction_of(sample(1047, 2048), &CFG), DirectionalSymbol::Left);
    }

    #[test]
    fn test_small_deflection_is_center() {
        // Inside what used to be a separate deadzone and beyond it, but under threshold
        assert_eq!(direction_of(sample(2300, 1800), &CFG), DirectionalSymbol::Center);
        assert_eq!(direction_of(sample(2900, 1200), &CFG), DirectionalSymbol::Center);
    }

    #[test]
    fn test_first_push_reports_event() {
        let mut state = ClassifierState::new();
        assert_eq!(
            classify(sample(4095, 2048), &mut state, &CFG),
            Some(DirectionalSymbol::Right)
        );
        assert!(!state.is_armed());
        assert_eq!(state.current_symbol(), DirectionalSymbol::Right);
    }

    #[test]
    fn test_held_push_reports_once() {
        let mut state = ClassifierState::new();
        assert!(classify(sample(2048, 4095), &mut state, &CFG).is_some());
        for _ in 0..20 {
            assert_eq!(classify(sample(2048, 4095), &mut state, &CFG), None);
        }
    }

    #[test]
    fn test_direction_change_without_center_is_ignored() {
        let mut state = ClassifierState::new();
        assert!(classify(sample(4095, 2048), &mut state, &CFG).is_some());
        // Swinging straight to LEFT without passing through center
        assert_eq!(classify(sample(0, 2048), &mut state, &CFG), None);
        assert_eq!(state.current_symbol(), DirectionalSymbol::Left);
    }

    #[test]
    fn test_return_to_center_rearms() {
        let mut state = ClassifierState::new();
        assert!(classify(sample(4095, 2048), &mut state, &CFG).is_some());
        assert_eq!(classify(sample(2048, 2048), &mut state, &CFG), None);
        assert!(state.is_armed());
        assert_eq!(
            classify(sample(4095, 2048), &mut state, &CFG),
            Some(DirectionalSymbol::Right)
        );
    }

    proptest! {
        #[test]
        fn prop_x_priority(x in 3049u16..=4095, y in 3049u16..=4095) {
            prop_assert_eq!(direction_of(sample(x, y), &CFG), DirectionalSymbol::Right);
            let mut state = ClassifierState::new();
            prop_assert_eq!(classify(sample(x, y), &mut state, &CFG), Some(DirectionalSymbol::Right));
        }

        #[test]
        fn prop_held_deflection_single_event(
            samples in proptest::collection::vec((3049u16..=4095, 0u16..=4095), 1..50)
        ) {
            let mut state = ClassifierState::new();
            let events = samples
                .iter()
                .filter_map(|&(x, y)| classify(sample(x, y), &mut state, &CFG))
                .count();
            prop_assert_eq!(events, 1);
        }

        #[test]
        fn prop_center_never_reports(x in 1048u16..=3048, y in 1048u16..=3048) {
            let mut state = ClassifierState::new();
            prop_assert_eq!(classify(sample(x, y), &mut state, &CFG), None);
            prop_assert!(state.is_armed());
        }
    }
}
