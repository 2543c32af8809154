//! Text display trait

use crate::feedback::Screen;

/// Errors that can occur driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Controller not initialized
    NotReady,
}

/// Display that renders whole screens of text
///
/// Each call replaces everything previously shown.
pub trait TextDisplay {
    /// Clear the display and draw `screen`
    fn show(&mut self, screen: &Screen) -> Result<(), DisplayError>;
}
