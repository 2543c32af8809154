//! ADC input pins
//!
//! The RP2040 converter is 12 bits wide and multiplexes four GPIO inputs
//! (GPIO26..29) plus the internal temperature sensor. Only the GPIO inputs
//! are exposed here; they are addressed by their mux number, so
//! `AdcReader::read(1)` converts GPIO27.

use embassy_rp::adc::{Adc, Blocking, Channel};
use keystick_hal::AdcReader;

/// ADC-capable GPIO, named by pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcInput {
    Gpio26 = 0,
    Gpio27 = 1,
    Gpio28 = 2,
    Gpio29 = 3,
}

impl AdcInput {
    /// Mux number passed to `AdcReader::read`
    pub fn channel(self) -> u8 {
        self as u8
    }
}

/// ADC read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// No pin has been attached to the requested channel
    Unbound,
    /// The converter reported an error
    Conversion,
}

/// Blocking converter with its input pins attached
pub struct Rp2040Adc<'d> {
    adc: Adc<'d, Blocking>,
    inputs: [Option<Channel<'d>>; 4],
}

impl<'d> Rp2040Adc<'d> {
    /// Wrap a blocking converter with nothing attached
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            adc,
            inputs: [None, None, None, None],
        }
    }

    /// Attach the pin channel for `input`, replacing any earlier one
    pub fn attach(&mut self, input: AdcInput, channel: Channel<'d>) {
        self.inputs[input.channel() as usize] = Some(channel);
    }
}

impl AdcReader for Rp2040Adc<'_> {
    type Error = AdcError;

    const RESOLUTION_BITS: u8 = 12;

    fn read(&mut self, channel: u8) -> Result<u16, AdcError> {
        let input = self
            .inputs
            .get_mut(channel as usize)
            .and_then(Option::as_mut)
            .ok_or(AdcError::Unbound)?;
        self.adc
            .blocking_read(input)
            .map_err(|_| AdcError::Conversion)
    }
}
