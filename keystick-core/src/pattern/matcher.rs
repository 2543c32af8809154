//! Exact ordered comparison of gesture sequences

use crate::gesture::DirectionalSymbol;

/// Check whether two sequences are identical, position by position
///
/// Both sequences are always built at full pattern length, so a length
/// mismatch is a logic error.
///
/// # Panics
/// If `a` and `b` have different lengths.
pub fn matches(a: &[DirectionalSymbol], b: &[DirectionalSymbol]) -> bool {
    assert_eq!(a.len(), b.len(), "compared gesture sequences of unequal length");
    a.iter().zip(b).all(|(x, y)| x == y)
}
