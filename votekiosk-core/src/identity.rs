//! Voter identity tags
//!
//! A tag is identified by its 5-byte UID. Authorization is a byte-for-byte
//! match against a fixed list compiled into the firmware.

use core::fmt;

/// Length of a tag UID in bytes
pub const UID_LEN: usize = 5;

/// Identifier read from a scanned tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Create a UID from its raw bytes
    pub const fn new(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }
}

/// Formats as space-separated uppercase hex, e.g. `73 91 B1 28 7B`
impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Membership check against the authorized tag list
///
/// Linear scan; the list is a handful of entries fixed at build time.
#[derive(Debug, Clone, Copy)]
pub struct IdentityMatcher<'a> {
    authorized: &'a [Uid],
}

impl<'a> IdentityMatcher<'a> {
    /// Create a matcher over the given list
    pub const fn new(authorized: &'a [Uid]) -> Self {
        Self { authorized }
    }

    /// True if some list entry equals `uid` byte-for-byte
    pub fn is_authorized(&self, uid: &Uid) -> bool {
        self.authorized.iter().any(|entry| entry == uid)
    }

    /// Number of authorized tags
    pub fn len(&self) -> usize {
        self.authorized.len()
    }

    /// True if no tag is authorized
    pub fn is_empty(&self) -> bool {
        self.authorized.is_empty()
    }
}
