//! Reference board wiring and bring-up

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::peripherals::{ADC1, I2C1, PA0, PA1, PB6, PB7, PC13};
use embassy_stm32::Peri;
use votekiosk_core::traits::TagReader;
use votekiosk_core::{Kiosk, KioskConfig};
use votekiosk_drivers::{AnalogSampler, BusTransport, ButtonInput, LedIndicator, Ssd1306};

use crate::adc::Adc1Registers;
use crate::clock::EmbassyClock;
use crate::delay::CycleDelay;
use crate::gpio::{BoardInput, BoardOutput};
use crate::i2c::I2c1Registers;

pub type Display<'d> = Ssd1306<BusTransport<I2c1Registers<'d>>>;
pub type Potentiometer<'d> = AnalogSampler<Adc1Registers<'d>>;
pub type Led<'d> = LedIndicator<BoardOutput<'d>>;
pub type Button<'d> = ButtonInput<BoardInput<'d>>;
pub type BoardKiosk<'d, T> = Kiosk<Display<'d>, Potentiometer<'d>, T, Led<'d>, Button<'d>>;

/// Devices on the reference board, minus the tag reader
pub struct Board<'d> {
    pub display: Display<'d>,
    pub potentiometer: Potentiometer<'d>,
    pub led: Led<'d>,
    pub button: Button<'d>,
}

impl<'d> Board<'d> {
    /// Claim the board peripherals
    ///
    /// The LED starts off (PC13 high).
    pub fn new(
        i2c1: Peri<'d, I2C1>,
        scl: Peri<'d, PB6>,
        sda: Peri<'d, PB7>,
        adc1: Peri<'d, ADC1>,
        pot: Peri<'d, PA1>,
        button: Peri<'d, PA0>,
        led: Peri<'d, PC13>,
    ) -> Self {
        Self {
            display: Ssd1306::new(BusTransport::new(I2c1Registers::new(i2c1, scl, sda))),
            potentiometer: AnalogSampler::new(Adc1Registers::new(adc1, pot)),
            led: LedIndicator::new_active_low(BoardOutput(Output::new(
                led,
                Level::High,
                Speed::Low,
            ))),
            button: ButtonInput::active_low(BoardInput(Input::new(button, Pull::Up))),
        }
    }

    /// Build the kiosk around an external tag reader
    pub fn into_kiosk<T: TagReader>(self, tags: T, config: KioskConfig) -> BoardKiosk<'d, T> {
        Kiosk::new(
            self.display,
            self.potentiometer,
            tags,
            self.led,
            self.button,
            config,
        )
    }
}

/// Start the kiosk and run its loop forever
///
/// If the display or converter fails to come up, interrupts are disabled and
/// the LED blinks until reset. `core_hz` calibrates that blink.
pub fn run<T: TagReader>(mut kiosk: BoardKiosk<'_, T>, core_hz: u32) -> ! {
    let mut delay = embassy_time::Delay;
    match kiosk.start(&mut delay) {
        Ok(()) => kiosk.run(&EmbassyClock, &mut delay),
        Err(_e) => {
            cortex_m::interrupt::disable();
            #[cfg(feature = "defmt")]
            defmt::error!("Startup failed ({}), halting", _e);
            kiosk.halt(&mut CycleDelay::new(core_hz))
        }
    }
}
