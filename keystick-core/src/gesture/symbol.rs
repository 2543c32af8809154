//! Directional symbols and raw samples

/// Discrete joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DirectionalSymbol {
    /// Stick at rest, inside the threshold on both axes
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
}

impl DirectionalSymbol {
    /// All symbols that can appear in a pattern
    pub const GESTURES: [DirectionalSymbol; 4] = [
        DirectionalSymbol::Up,
        DirectionalSymbol::Down,
        DirectionalSymbol::Left,
        DirectionalSymbol::Right,
    ];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionalSymbol::Center => "CENTER",
            DirectionalSymbol::Up => "UP",
            DirectionalSymbol::Down => "DOWN",
            DirectionalSymbol::Left => "LEFT",
            DirectionalSymbol::Right => "RIGHT",
        }
    }

    /// Check if this is the rest position
    pub fn is_center(&self) -> bool {
        matches!(self, DirectionalSymbol::Center)
    }
}

/// Instantaneous position of both joystick axes, in raw ADC counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawAxisSample {
    pub x: u16,
    pub y: u16,
}

impl RawAxisSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}
