//! Candidate selection from the potentiometer
//!
//! The 12-bit raw reading is split into three bands by two thresholds.

/// One of the three candidates on the ballot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    CandidateA,
    CandidateB,
    CandidateC,
}

impl Selection {
    /// All candidates in ballot order
    pub const ALL: [Selection; 3] = [
        Selection::CandidateA,
        Selection::CandidateB,
        Selection::CandidateC,
    ];

    /// Position on the ballot (0, 1 or 2)
    pub const fn index(self) -> usize {
        match self {
            Selection::CandidateA => 0,
            Selection::CandidateB => 1,
            Selection::CandidateC => 2,
        }
    }

    /// Single-letter candidate tag
    pub const fn letter(self) -> char {
        match self {
            Selection::CandidateA => 'A',
            Selection::CandidateB => 'B',
            Selection::CandidateC => 'C',
        }
    }

    /// Ballot label as printed on screen
    pub const fn label(self) -> &'static str {
        match self {
            Selection::CandidateA => "CAND A",
            Selection::CandidateB => "CAND B",
            Selection::CandidateC => "CAND C",
        }
    }
}

/// Band boundaries for mapping a raw analog sample to a [`Selection`]
///
/// `raw < low` selects A, `raw < high` selects B, anything else C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    low: u16,
    high: u16,
}

impl Thresholds {
    /// Equal thirds of the 12-bit range
    pub const THIRDS: Self = Self {
        low: 1365,
        high: 2730,
    };

    /// Create thresholds, rejecting `low > high`
    pub const fn new(low: u16, high: u16) -> Option<Self> {
        if low > high {
            None
        } else {
            Some(Self { low, high })
        }
    }

    /// Lower boundary (first value selecting B)
    pub const fn low(&self) -> u16 {
        self.low
    }

    /// Upper boundary (first value selecting C)
    pub const fn high(&self) -> u16 {
        self.high
    }

    /// Map a raw sample to a candidate
    pub const fn select(&self, raw: u16) -> Selection {
        if raw < self.low {
            Selection::CandidateA
        } else if raw < self.high {
            Selection::CandidateB
        } else {
            Selection::CandidateC
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::THIRDS
    }
}
