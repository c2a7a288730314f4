//! State machine definition
//!
//! Every screen the kiosk shows is a function of the current [`UiState`].
//! Timed screens carry their own deadline so a state cannot exist without
//! the timer that ends it.

use super::events::Event;
use crate::config::Timing;
use crate::identity::Uid;
use crate::selection::Selection;
use crate::time::{after, deadline_reached};

/// Kiosk UI states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    /// Idle, waiting for a tag
    #[default]
    Welcome,
    /// Ballot showing; the arrow next to `selection` blinks
    CasteVote {
        selection: Selection,
        blink_visible: bool,
        blink_until: u32,
    },
    /// Vote recorded, confirmation showing until `until`
    VoteCasted { selection: Selection, until: u32 },
    /// Authorized tag accepted, showing its UID until `until`
    Verified { uid: Uid, until: u32 },
    /// Unknown tag rejected, showing its UID until `until`
    Invalid { uid: Uid, until: u32 },
}

/// Payload-free view of [`UiState`]
///
/// Used where only "which screen" matters, e.g. remembering where a button
/// press started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    Welcome,
    CasteVote,
    VoteCasted,
    Verified,
    Invalid,
}

impl UiState {
    /// Which screen this state shows
    pub const fn kind(&self) -> ScreenKind {
        match self {
            UiState::Welcome => ScreenKind::Welcome,
            UiState::CasteVote { .. } => ScreenKind::CasteVote,
            UiState::VoteCasted { .. } => ScreenKind::VoteCasted,
            UiState::Verified { .. } => ScreenKind::Verified,
            UiState::Invalid { .. } => ScreenKind::Invalid,
        }
    }

    /// Display-until deadline of a timed screen
    ///
    /// The ballot's blink timer is not a screen deadline.
    pub const fn deadline(&self) -> Option<u32> {
        match self {
            UiState::VoteCasted { until, .. }
            | UiState::Verified { until, .. }
            | UiState::Invalid { until, .. } => Some(*until),
            UiState::Welcome | UiState::CasteVote { .. } => None,
        }
    }

    /// Check if a timed screen has run its course
    pub const fn is_expired(&self, now_ms: u32) -> bool {
        match self.deadline() {
            Some(until) => deadline_reached(now_ms, until),
            None => false,
        }
    }

    /// Check if the blink timer of the ballot has elapsed
    pub const fn blink_due(&self, now_ms: u32) -> bool {
        match self {
            UiState::CasteVote { blink_until, .. } => deadline_reached(now_ms, *blink_until),
            _ => false,
        }
    }

    /// Selection on the ballot or confirmation screen
    pub const fn selection(&self) -> Option<Selection> {
        match self {
            UiState::CasteVote { selection, .. } | UiState::VoteCasted { selection, .. } => {
                Some(*selection)
            }
            _ => None,
        }
    }

    /// Check if tag scans may change the state
    pub const fn accepts_tags(&self) -> bool {
        matches!(self, UiState::Welcome)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic. `now_ms` stamps any
    /// deadline the next state carries.
    pub fn transition(self, event: Event, now_ms: u32, timing: &Timing) -> Self {
        use Event::*;
        use UiState::*;

        let hold = after(now_ms, timing.screen_hold_ms);
        let blink = after(now_ms, timing.blink_period_ms);

        match (self, event) {
            // Tag scans only count on the welcome screen
            (Welcome, TagAuthorized(uid)) => Verified { uid, until: hold },
            (Welcome, TagRejected(uid)) => Invalid { uid, until: hold },

            // Timed screens
            (Verified { .. }, VotingOpened(selection)) => CasteVote {
                selection,
                blink_visible: true,
                blink_until: blink,
            },
            (Invalid { .. }, ScreenExpired) => Welcome,
            (VoteCasted { .. }, ScreenExpired) => Welcome,

            // Ballot animation and potentiometer
            (
                CasteVote {
                    selection: current,
                    ..
                },
                SelectionSampled(selection),
            ) if selection != current => CasteVote {
                selection,
                blink_visible: true,
                blink_until: blink,
            },
            (
                CasteVote {
                    selection,
                    blink_visible,
                    ..
                },
                BlinkElapsed,
            ) => CasteVote {
                selection,
                blink_visible: !blink_visible,
                blink_until: blink,
            },

            // Button
            (CasteVote { selection, .. }, ShortPress) => VoteCasted {
                selection,
                until: hold,
            },
            (_, ShortPress) => Welcome,
            (_, LongPressReleased {
                origin: ScreenKind::Welcome,
            }) => Welcome,

            // Default: stay in current state
            _ => self,
        }
    }
}
