//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use votekiosk_hal::clock::Monotonic;

/// Uptime in milliseconds, truncated to 32 bits
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
