//! Tag reader trait
//!
//! The reader's own request and anticollision protocol stays behind this
//! interface; the kiosk only needs "is a tag there" and "what is its UID".

use crate::identity::Uid;

/// Result of polling the reader field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TagPresence {
    /// A tag answered the request
    Present,
    /// Nothing in the field
    Absent,
}

/// Errors from a UID read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TagError {
    /// Tag left the field or stopped answering
    NoResponse,
    /// More than one tag answered
    Collision,
    /// Checksum or framing failure
    Corrupt,
}

/// RFID tag reader
pub trait TagReader {
    /// Look for a tag in the field
    fn poll(&mut self) -> TagPresence;

    /// Read the UID of the tag found by the last poll
    fn read_uid(&mut self) -> Result<Uid, TagError>;
}
