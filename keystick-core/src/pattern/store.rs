//! Fixed-capacity pattern storage

use heapless::Vec;

use crate::gesture::DirectionalSymbol;

/// Number of gestures in a pattern
pub const PATTERN_LEN: usize = 6;

/// Append attempted on a full pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Overflow;

/// Ordered sequence of up to [`PATTERN_LEN`] gestures
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GesturePattern {
    symbols: Vec<DirectionalSymbol, PATTERN_LEN>,
}

impl GesturePattern {
    /// Create an empty pattern
    pub const fn new() -> Self {
        Self { symbols: Vec::new() }
    }

    /// Build a pattern from a slice of symbols
    pub fn from_symbols(symbols: &[DirectionalSymbol]) -> Result<Self, Overflow> {
        Vec::from_slice(symbols)
            .map(|symbols| Self { symbols })
            .map_err(|_| Overflow)
    }

    /// Append a gesture at the end
    pub fn append(&mut self, symbol: DirectionalSymbol) -> Result<(), Overflow> {
        self.symbols.push(symbol).map_err(|_| Overflow)
    }

    /// Check if all slots are taken
    pub fn is_full(&self) -> bool {
        self.symbols.is_full()
    }

    /// Check if no gesture has been captured yet
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of captured gestures
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Drop all captured gestures
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Captured gestures in insertion order
    pub fn as_slice(&self) -> &[DirectionalSymbol] {
        &self.symbols
    }

    /// Compare against another complete pattern
    ///
    /// # Panics
    /// If the patterns differ in length.
    pub fn matches(&self, other: &GesturePattern) -> bool {
        super::matcher::matches(self.as_slice(), other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DirectionalSymbol::*;

    #[test]
    fn test_append_until_full() {
        let mut pattern = GesturePattern::new();
        assert!(pattern.is_empty());

        for (i, symbol) in [Right, Right, Left, Up, Down, Right].into_iter().enumerate() {
            assert!(!pattern.is_full());
            assert_eq!(pattern.append(symbol), Ok(()));
            assert_eq!(pattern.len(), i + 1);
        }

        assert!(pattern.is_full());
        assert_eq!(pattern.as_slice(), &[Right, Right, Left, Up, Down, Right]);
    }

    #[test]
    fn test_overflow() {
        let mut pattern = GesturePattern::from_symbols(&[Up; PATTERN_LEN]).unwrap();
        assert_eq!(pattern.append(Down), Err(Overflow));
        // Contents untouched
        assert_eq!(pattern.as_slice(), &[Up; PATTERN_LEN]);
    }

    #[test]
    fn test_from_symbols_too_long() {
        assert_eq!(
            GesturePattern::from_symbols(&[Left; PATTERN_LEN + 1]),
            Err(Overflow)
        );
    }

    #[test]
    fn test_clear() {
        let mut pattern = GesturePattern::from_symbols(&[Up, Down]).unwrap();
        pattern.clear();
        assert!(pattern.is_empty());
        assert_eq!(pattern.append(Left), Ok(()));
        assert_eq!(pattern.as_slice(), &[Left]);
    }
}
