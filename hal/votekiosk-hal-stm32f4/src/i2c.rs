//! I2C1 register access for STM32F4
//!
//! embassy-stm32 owns pin muxing, the peripheral clock and the timing
//! registers; the transaction itself is driven flag by flag through
//! [`I2cRegisters`].

use embassy_stm32::i2c::{self, I2c, Master};
use embassy_stm32::mode::Blocking;
use embassy_stm32::pac;
use embassy_stm32::peripherals::{I2C1, PB6, PB7};
use embassy_stm32::time::Hertz;
use embassy_stm32::Peri;
use votekiosk_hal::i2c::I2cRegisters;

/// SCL frequency for the display bus
pub const BUS_FREQUENCY: Hertz = Hertz(100_000);

/// I2C1 configured as a master, accessed at register level
pub struct I2c1Registers<'d> {
    _bus: I2c<'d, Blocking, Master>,
}

impl<'d> I2c1Registers<'d> {
    /// Claim I2C1 on PB6/PB7
    pub fn new(peri: Peri<'d, I2C1>, scl: Peri<'d, PB6>, sda: Peri<'d, PB7>) -> Self {
        let mut config = i2c::Config::default();
        config.frequency = BUS_FREQUENCY;
        Self {
            _bus: I2c::new_blocking(peri, scl, sda, config),
        }
    }
}

impl I2cRegisters for I2c1Registers<'_> {
    fn generate_start(&mut self) {
        pac::I2C1.cr1().modify(|w| w.set_start(true));
    }

    fn start_sent(&self) -> bool {
        pac::I2C1.sr1().read().start()
    }

    fn write_data(&mut self, byte: u8) {
        pac::I2C1.dr().write(|w| w.set_dr(byte));
    }

    fn address_acked(&self) -> bool {
        pac::I2C1.sr1().read().addr()
    }

    fn clear_address_flag(&mut self) {
        // SR1 then SR2 read clears ADDR
        let _ = pac::I2C1.sr1().read();
        let _ = pac::I2C1.sr2().read();
    }

    fn tx_empty(&self) -> bool {
        pac::I2C1.sr1().read().txe()
    }

    fn transfer_finished(&self) -> bool {
        pac::I2C1.sr1().read().btf()
    }

    fn generate_stop(&mut self) {
        pac::I2C1.cr1().modify(|w| w.set_stop(true));
    }
}
