//! Board GPIO wrappers
//!
//! Adapt embassy-stm32 pins to the `votekiosk-hal` pin traits.

use embassy_stm32::gpio::{Input, Output};
use votekiosk_hal::gpio::{InputPin, OutputPin};

/// Push-pull output
pub struct BoardOutput<'d>(pub Output<'d>);

impl OutputPin for BoardOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct BoardInput<'d>(pub Input<'d>);

impl InputPin for BoardInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}
