//! Push-button input

use votekiosk_core::traits::ButtonLine;
use votekiosk_hal::gpio::InputPin;

/// Push-button on a GPIO input
///
/// The reference board pulls the line up and the button shorts it to
/// ground, so it reads pressed while the pin is low.
pub struct ButtonInput<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> ButtonInput<P> {
    /// Button that pulls the line low when pressed
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Button that pulls the line high when pressed
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }
}

impl<P: InputPin> ButtonLine for ButtonInput<P> {
    fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.active_low
    }
}
