//! Button edge detection and press classification
//!
//! The button is sampled once per loop iteration. An edge is any change
//! from the previous sample; there is no extra filtering, so the loop period
//! is the only thing standing between contact bounce and a spurious
//! press/release pair.

/// Edge seen on a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEdge {
    /// Released -> pressed
    Pressed,
    /// Pressed -> released, after being held for `held_ms`
    Released { held_ms: u32 },
}

/// Press classification by hold duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

impl PressKind {
    /// Classify a hold; `held_ms >= long_press_ms` is long
    pub const fn classify(held_ms: u32, long_press_ms: u32) -> Self {
        if held_ms >= long_press_ms {
            PressKind::Long
        } else {
            PressKind::Short
        }
    }
}

/// Edge detector for one button
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDebouncer {
    /// Level seen on the previous sample
    pressed: bool,
    /// Tick at which the current press began
    press_start_ms: u32,
}

impl InputDebouncer {
    /// Create a detector that assumes the button starts released
    pub const fn new() -> Self {
        Self {
            pressed: false,
            press_start_ms: 0,
        }
    }

    /// Feed one sample
    ///
    /// # Arguments
    /// - `pressed`: Button level now (true = held down)
    /// - `now_ms`: Current tick
    pub fn sample(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEdge> {
        let edge = match (self.pressed, pressed) {
            (false, true) => {
                self.press_start_ms = now_ms;
                Some(ButtonEdge::Pressed)
            }
            (true, false) => Some(ButtonEdge::Released {
                held_ms: now_ms.wrapping_sub(self.press_start_ms),
            }),
            _ => None,
        };
        self.pressed = pressed;
        edge
    }

    /// Level seen on the last sample
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// How long the current press has been held, if the button is down
    pub fn held_ms(&self, now_ms: u32) -> Option<u32> {
        if self.pressed {
            Some(now_ms.wrapping_sub(self.press_start_ms))
        } else {
            None
        }
    }
}
