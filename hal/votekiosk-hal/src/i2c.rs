//! I2C bus abstractions
//!
//! Two layers: [`I2cRegisters`] exposes the master peripheral's control and
//! status flags one at a time, and [`I2cBus`] is a complete write
//! transaction built on top of them (see `votekiosk-drivers::bus`).

/// Two-wire master peripheral, register level
///
/// Each method maps to a single control-bit write or status-flag read on
/// the peripheral. None of them block; waiting is the caller's job.
pub trait I2cRegisters {
    /// Request a start condition
    fn generate_start(&mut self);

    /// Start condition has been put on the bus (SB)
    fn start_sent(&self) -> bool;

    /// Load a byte into the data register
    fn write_data(&mut self, byte: u8);

    /// Address byte was acknowledged by the target (ADDR)
    fn address_acked(&self) -> bool;

    /// Clear the address-acknowledged flag
    ///
    /// On most parts this is a read of both status registers.
    fn clear_address_flag(&mut self);

    /// Data register is empty and can take the next byte (TXE)
    fn tx_empty(&self) -> bool;

    /// Last byte has left the shift register (BTF)
    fn transfer_finished(&self) -> bool;

    /// Request a stop condition, releasing the bus
    fn generate_stop(&mut self);
}

/// I2C bus master
///
/// The kiosk only ever writes to its peripherals, so this is write-only.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent in order after the address
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}
