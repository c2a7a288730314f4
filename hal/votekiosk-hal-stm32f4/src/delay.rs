//! Busy-wait delay
//!
//! Counts core cycles, so it keeps working with interrupts disabled when the
//! embassy time driver no longer advances.

use embedded_hal::delay::DelayNs;

/// Cycle-counting delay for a fixed core clock
pub struct CycleDelay {
    core_hz: u32,
}

impl CycleDelay {
    /// Delay calibrated for a core running at `core_hz`
    pub const fn new(core_hz: u32) -> Self {
        Self { core_hz }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(self.core_hz) / 1_000_000_000;
        cortex_m::asm::delay(cycles.min(u64::from(u32::MAX)) as u32);
    }

    fn delay_ms(&mut self, ms: u32) {
        let per_ms = self.core_hz / 1_000;
        for _ in 0..ms {
            cortex_m::asm::delay(per_ms);
        }
    }
}
