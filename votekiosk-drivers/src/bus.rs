//! Two-wire write transport
//!
//! Drives one master-transmitter transaction over the register flags of an
//! [`I2cRegisters`] block: start, address, data bytes, stop. Every flag wait
//! is bounded by the poll budget. A failed wait aborts the remaining bytes,
//! but the stop condition is always issued so the bus is released.

use votekiosk_core::debug;
use votekiosk_hal::i2c::{I2cBus, I2cRegisters};
use votekiosk_hal::poll::{poll_until, DEFAULT_POLL_BUDGET};

/// A bounded wait inside a transaction ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Start condition never went out
    StartTimeout,
    /// Target did not acknowledge its address
    AddressTimeout,
    /// Data register never emptied
    ByteTimeout,
}

/// Polling I2C master built on raw peripheral flags
pub struct BusTransport<R> {
    regs: R,
    budget: u32,
}

impl<R: I2cRegisters> BusTransport<R> {
    /// Create a transport with the default poll budget
    pub fn new(regs: R) -> Self {
        Self::with_budget(regs, DEFAULT_POLL_BUDGET)
    }

    /// Create a transport that gives up each wait after `budget` flag reads
    pub fn with_budget(regs: R, budget: u32) -> Self {
        Self { regs, budget }
    }

    /// Give back the register block
    pub fn release(self) -> R {
        self.regs
    }

    fn begin(&mut self, address: u8) -> Result<(), BusError> {
        self.regs.generate_start();
        poll_until(self.budget, || self.regs.start_sent()).map_err(|_| BusError::StartTimeout)?;

        // 7-bit address, write direction
        self.regs.write_data(address << 1);
        poll_until(self.budget, || self.regs.address_acked())
            .map_err(|_| BusError::AddressTimeout)?;
        self.regs.clear_address_flag();
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> Result<(), BusError> {
        for &byte in data {
            poll_until(self.budget, || self.regs.tx_empty()).map_err(|_| BusError::ByteTimeout)?;
            self.regs.write_data(byte);
        }

        // Let the last byte drain before stop; not fatal if it never reports
        if poll_until(self.budget, || self.regs.transfer_finished()).is_err() {
            debug!("Transfer-finished flag never set, stopping anyway");
        }
        Ok(())
    }
}

impl<R: I2cRegisters> I2cBus for BusTransport<R> {
    type Error = BusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), BusError> {
        let result = self.begin(address).and_then(|()| self.send(data));
        self.regs.generate_stop();
        result
    }
}
