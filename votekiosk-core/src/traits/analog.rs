//! Analog input trait

/// Single-channel 12-bit analog input
pub trait AnalogInput {
    /// Error type for converter startup
    type Error;

    /// One-time converter configuration
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Take one sample (0-4095)
    ///
    /// A conversion that does not complete in time reads as 0, which cannot
    /// be told apart from a genuine zero reading.
    fn read_raw(&mut self) -> u16;
}
