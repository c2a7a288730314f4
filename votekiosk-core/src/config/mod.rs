//! Configuration types
//!
//! All configuration is fixed at build time. [`KioskConfig::DEFAULT`] holds
//! the reference values; a board crate can build its own constant from the
//! same pieces.

pub mod hardware;
pub mod timing;

pub use hardware::*;
pub use timing::Timing;

use crate::identity::Uid;
use crate::selection::Thresholds;

/// Tags allowed to vote in the reference configuration
pub const AUTHORIZED_UIDS: &[Uid] = &[
    Uid::new([0x73, 0x91, 0xB1, 0x28, 0x7B]),
    Uid::new([0x96, 0x7C, 0x41, 0x1E, 0xB5]),
];

/// Complete kiosk configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KioskConfig {
    /// Tags that may cast a vote
    pub authorized: &'static [Uid],
    /// Potentiometer band boundaries
    pub thresholds: Thresholds,
    /// Loop pacing and screen timers
    pub timing: Timing,
}

impl KioskConfig {
    /// Reference configuration
    pub const DEFAULT: Self = Self {
        authorized: AUTHORIZED_UIDS,
        thresholds: Thresholds::THIRDS,
        timing: Timing::DEFAULT,
    };
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = KioskConfig::default();
        assert_eq!(config.authorized.len(), 2);
        assert_eq!(config.thresholds.low(), 1365);
        assert_eq!(config.thresholds.high(), 2730);
        assert_eq!(config.timing.screen_hold_ms, 3000);
    }
}
