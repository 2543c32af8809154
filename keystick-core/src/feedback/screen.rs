//! Screen content
//!
//! Up to three text lines, each at a vertical pixel offset. Horizontal
//! placement (centering) belongs to the display driver.

use heapless::{String, Vec};

/// Maximum characters per line (128 px at 8 px per glyph)
pub const MAX_LINE_LEN: usize = 16;

/// Maximum lines per screen
pub const MAX_LINES: usize = 3;

/// Vertical offsets used by two-line screens
const TWO_LINE_Y: [u8; 2] = [8, 32];

/// Vertical offsets used by three-line screens
const THREE_LINE_Y: [u8; 3] = [0, 16, 32];

/// One line of text at a vertical offset
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextLine {
    /// Top of the line in pixels
    pub y: u8,
    pub text: String<MAX_LINE_LEN>,
}

/// Full screen of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Screen {
    lines: Vec<TextLine, MAX_LINES>,
}

impl Screen {
    /// Create an empty screen
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Two-line layout
    pub fn two(first: &str, second: &str) -> Self {
        let mut screen = Self::new();
        screen.push(TWO_LINE_Y[0], first);
        screen.push(TWO_LINE_Y[1], second);
        screen
    }

    /// Three-line layout
    pub fn three(first: &str, second: &str, third: &str) -> Self {
        let mut screen = Self::new();
        screen.push(THREE_LINE_Y[0], first);
        screen.push(THREE_LINE_Y[1], second);
        screen.push(THREE_LINE_Y[2], third);
        screen
    }

    /// Add a line, truncating text that does not fit
    ///
    /// Lines beyond [`MAX_LINES`] are dropped.
    pub fn push(&mut self, y: u8, text: &str) {
        let mut line = String::new();
        for ch in text.chars() {
            if line.push(ch).is_err() {
                break;
            }
        }
        let _ = self.lines.push(TextLine { y, text: line });
    }

    /// Lines in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.lines.iter()
    }

    /// Check if nothing would be drawn
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_line_layout() {
        let screen = Screen::two("Pattern Saved", "Press B");
        let lines: Vec<&TextLine, 3> = screen.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].y, 8);
        assert_eq!(lines[1].y, 32);
    }

    #[test]
    fn test_truncation() {
        let screen = Screen::two("This line is far too long", "");
        let first = screen.lines().next().unwrap();
        assert_eq!(first.text.as_str(), "This line is far");
    }

    #[test]
    fn test_extra_lines_dropped() {
        let mut screen = Screen::three("a", "b", "c");
        screen.push(48, "d");
        assert_eq!(screen.lines().count(), MAX_LINES);
    }
}
