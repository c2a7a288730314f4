//! LED indicator output
//!
//! Drives a status LED from a GPIO pin. The reference board wires its LED
//! between the supply and the pin, so "on" means the pin is low.

use votekiosk_core::traits::Indicator;
use votekiosk_hal::gpio::OutputPin;

/// GPIO-driven indicator LED
pub struct LedIndicator<P> {
    pin: P,
    /// If true, LED on = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> LedIndicator<P> {
    /// Create an indicator, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false);
        led
    }

    /// LED lit when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// LED lit when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Indicator for LedIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
