//! ADC abstractions
//!
//! Single-shot, software-triggered conversions on a 12-bit converter.

/// Largest raw value a 12-bit conversion can produce
pub const ADC_MAX: u16 = 0x0FFF;

/// Analog-to-digital converter, register level
pub trait AdcRegisters {
    /// Switch the converter on in single-conversion mode
    fn power_on(&mut self);

    /// Converter reports itself powered
    fn is_powered(&self) -> bool;

    /// Select the channel for the next conversion
    fn select_channel(&mut self, channel: u8);

    /// Trigger one conversion
    fn start_conversion(&mut self);

    /// End-of-conversion flag (EOC)
    fn conversion_complete(&self) -> bool;

    /// Read the data register
    ///
    /// Reading clears the end-of-conversion flag on most parts. Upper bits
    /// beyond the converter resolution are not guaranteed to be zero.
    fn read_data(&mut self) -> u16;
}
