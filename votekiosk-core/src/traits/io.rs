//! Indicator and button traits

/// Binary status indicator (an LED)
pub trait Indicator {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}

/// Single push-button
///
/// Implementations hide the electrical polarity; `true` always means the
/// button is held down.
pub trait ButtonLine {
    /// Sample the button level now
    fn is_pressed(&self) -> bool;
}
