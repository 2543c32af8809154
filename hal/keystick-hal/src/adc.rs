//! Analog-to-digital converter abstraction
//!
//! Most MCUs expose a single converter multiplexed across several input
//! channels, so the trait reads by channel number rather than handing out
//! one object per channel.

/// ADC sampler
pub trait AdcReader {
    /// Error type for conversions
    type Error;

    /// Resolution of a single conversion in bits
    const RESOLUTION_BITS: u8;

    /// Perform one conversion on `channel`
    ///
    /// Channel numbering is chip-specific.
    fn read(&mut self, channel: u8) -> Result<u16, Self::Error>;

    /// Largest value a conversion can return
    fn full_scale() -> u16 {
        ((1u32 << Self::RESOLUTION_BITS) - 1) as u16
    }
}
