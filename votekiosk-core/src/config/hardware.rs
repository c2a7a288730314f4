//! Hardware constants
//!
//! These describe the reference board and are not meant to be tuned per
//! deployment; bus speed and pin muxing live in the board crate.

/// SSD1306 7-bit bus address
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Potentiometer ADC channel
pub const POT_ADC_CHANNEL: u8 = 1;

/// Flag reads allowed per peripheral wait
pub const POLL_BUDGET: u32 = votekiosk_hal::poll::DEFAULT_POLL_BUDGET;

/// Display data bytes per bus transaction
pub const DISPLAY_CHUNK_LEN: usize = 32;

/// Indicator half-period while halted on a startup fault
pub const FAULT_BLINK_MS: u32 = 150;
