//! Bounded busy-wait
//!
//! Peripheral flags are polled a fixed number of times rather than for a
//! wall-clock duration, so a wait costs at most `budget` flag reads no matter
//! what the clock tree is doing.

/// Default number of flag reads before a wait gives up
pub const DEFAULT_POLL_BUDGET: u32 = 100_000;

/// A bounded wait ran out of budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollTimeout;

/// Poll `ready` until it returns true, at most `budget` times
///
/// A budget of zero times out without polling.
pub fn poll_until<F>(budget: u32, mut ready: F) -> Result<(), PollTimeout>
where
    F: FnMut() -> bool,
{
    for _ in 0..budget {
        if ready() {
            return Ok(());
        }
    }
    Err(PollTimeout)
}
