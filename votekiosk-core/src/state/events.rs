//! Events that trigger state transitions

use super::machine::ScreenKind;
use crate::identity::Uid;
use crate::selection::Selection;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Tag reader events
    /// A tag on the authorized list was read
    TagAuthorized(Uid),
    /// A tag not on the list was read
    TagRejected(Uid),

    // Timer events
    /// The Verified hold elapsed; carries the selection sampled at that moment
    VotingOpened(Selection),
    /// The Invalid or VoteCasted hold elapsed
    ScreenExpired,
    /// The selection arrow blink period elapsed
    BlinkElapsed,

    // Potentiometer events
    /// The potentiometer was sampled while voting
    SelectionSampled(Selection),

    // Button events
    /// Button released before the long-press threshold
    ShortPress,
    /// Button released after the long-press threshold; `origin` is the
    /// screen that was showing when the press began
    LongPressReleased { origin: ScreenKind },
}
