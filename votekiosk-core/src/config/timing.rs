//! Loop pacing and UI timers

/// Timing parameters, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Delay at the end of every loop iteration; also the button sampling period
    pub loop_period_ms: u32,
    /// Pause after a successful tag read before the button is sampled
    pub tag_settle_ms: u32,
    /// Minimum time the indicator stays lit after a tag read
    pub indicator_min_on_ms: u32,
    /// Hold duration at or above which a press counts as long
    pub long_press_ms: u32,
    /// Selection arrow visibility toggle period
    pub blink_period_ms: u32,
    /// How long Verified, Invalid and VoteCasted stay on screen
    pub screen_hold_ms: u32,
}

impl Timing {
    /// Reference timing
    pub const DEFAULT: Self = Self {
        loop_period_ms: 20,
        tag_settle_ms: 50,
        indicator_min_on_ms: 200,
        long_press_ms: 1000,
        blink_period_ms: 500,
        screen_hold_ms: 3000,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
