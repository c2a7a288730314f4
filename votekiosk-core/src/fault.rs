//! Fail-safe halt
//!
//! Used when one-time peripheral configuration fails at startup. The kiosk
//! cannot run without its display or converter, so it stops and blinks the
//! indicator until power is cycled. The board crate disables interrupts
//! before calling in here.

use embedded_hal::delay::DelayNs;

use crate::config::FAULT_BLINK_MS;
use crate::traits::Indicator;

/// Blink the indicator forever
pub fn halt_blinking<I, D>(indicator: &mut I, delay: &mut D) -> !
where
    I: Indicator,
    D: DelayNs,
{
    loop {
        blink_once(indicator, delay);
    }
}

/// One on/off cycle of the fault pattern
fn blink_once<I: Indicator, D: DelayNs>(indicator: &mut I, delay: &mut D) {
    indicator.set_on(true);
    delay.delay_ms(FAULT_BLINK_MS);
    indicator.set_on(false);
    delay.delay_ms(FAULT_BLINK_MS);
}
