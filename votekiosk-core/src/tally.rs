//! Per-candidate vote counters
//!
//! Counts live in RAM for the session only.

use crate::selection::Selection;

/// Vote counts, one per candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tally {
    counts: [u32; 3],
}

impl Tally {
    /// Zeroed tally
    pub const fn new() -> Self {
        Self { counts: [0; 3] }
    }

    /// Record one vote
    ///
    /// Saturates rather than wrapping so counts never decrease.
    pub fn record(&mut self, selection: Selection) {
        let count = &mut self.counts[selection.index()];
        *count = count.saturating_add(1);
    }

    /// Votes recorded for one candidate
    pub const fn count(&self, selection: Selection) -> u32 {
        self.counts[selection.index()]
    }

    /// Votes recorded across all candidates
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }
}
