//! Screen layouts
//!
//! Each screen clears the panel and redraws everything it shows. A failed
//! draw does not stop the rest of the screen; the first error is returned
//! once every draw has been attempted, and the next render repaints it.

use core::fmt::Write;

use heapless::String;

use crate::identity::Uid;
use crate::selection::Selection;
use crate::state::UiState;
use crate::tally::Tally;
use crate::traits::TextDisplay;

/// Runs every draw of a screen, keeping the first failure
struct Batch<E> {
    first: Option<E>,
}

impl<E> Batch<E> {
    const fn new() -> Self {
        Self { first: None }
    }

    fn step(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            if self.first.is_none() {
                self.first = Some(e);
            }
        }
    }

    fn finish(self) -> Result<(), E> {
        match self.first {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// `UID:73 91 B1 28 7B`
fn uid_line(uid: &Uid) -> String<24> {
    let mut line = String::new();
    // 18 chars at most
    let written = write!(line, "UID:{}", uid);
    debug_assert!(written.is_ok());
    line
}

/// `A: 12`
fn count_line(selection: Selection, count: u32) -> String<16> {
    let mut line = String::new();
    // 13 chars at most
    let written = write!(line, "{}: {}", selection.letter(), count);
    debug_assert!(written.is_ok());
    line
}

/// Idle screen
pub fn welcome<D: TextDisplay>(display: &mut D) -> Result<(), D::Error> {
    let mut batch = Batch::new();
    batch.step(display.clear());
    batch.step(display.print_at(2, 14, "WELCOME"));
    batch.step(display.print_at(3, 14, "RFID VOTING SYSTEM"));
    batch.finish()
}

/// Ballot with a blinking arrow next to the current selection
pub fn caste_vote<D: TextDisplay>(
    display: &mut D,
    selection: Selection,
    arrow_visible: bool,
) -> Result<(), D::Error> {
    let mut batch = Batch::new();
    batch.step(display.clear());
    batch.step(display.print_at(0, 8, "CASTE VOTE"));
    for candidate in Selection::ALL {
        let page = 2 + candidate.index() as u8;
        let marker = if arrow_visible && candidate == selection {
            ">"
        } else {
            " "
        };
        batch.step(display.print_at(page, 2, marker));
        batch.step(display.print_at(page, 8, candidate.label()));
    }
    batch.step(display.print_at(6, 0, "Turn pot to select"));
    batch.finish()
}

/// Vote confirmation
pub fn vote_casted<D: TextDisplay>(display: &mut D, selection: Selection) -> Result<(), D::Error> {
    let mut batch = Batch::new();
    batch.step(display.clear());
    batch.step(display.print_at(1, 12, "VOTE"));
    batch.step(display.print_at(2, 10, "CASTED"));
    batch.step(display.print_at(4, 8, selection.label()));
    batch.finish()
}

/// Accepted tag
pub fn verified<D: TextDisplay>(display: &mut D, uid: &Uid) -> Result<(), D::Error> {
    identity_result(display, "VOTER ID VERIFIED", uid)
}

/// Rejected tag
pub fn invalid<D: TextDisplay>(display: &mut D, uid: &Uid) -> Result<(), D::Error> {
    identity_result(display, "VOTER ID INVALID", uid)
}

fn identity_result<D: TextDisplay>(
    display: &mut D,
    heading: &str,
    uid: &Uid,
) -> Result<(), D::Error> {
    let mut batch = Batch::new();
    batch.step(display.clear());
    batch.step(display.print_at(1, 8, heading));
    batch.step(display.print_at(4, 10, &uid_line(uid)));
    batch.finish()
}

/// Vote counts, shown while the button is held on the welcome screen
pub fn tally_overlay<D: TextDisplay>(display: &mut D, tally: &Tally) -> Result<(), D::Error> {
    let mut batch = Batch::new();
    batch.step(display.clear());
    batch.step(display.print_at(0, 6, "VOTE COUNTS"));
    for candidate in Selection::ALL {
        let page = 2 + candidate.index() as u8;
        let line = count_line(candidate, tally.count(candidate));
        batch.step(display.print_at(page, 6, &line));
    }
    batch.finish()
}

/// Draw whichever screen `state` implies
pub fn render<D: TextDisplay>(display: &mut D, state: &UiState) -> Result<(), D::Error> {
    match state {
        UiState::Welcome => welcome(display),
        UiState::CasteVote {
            selection,
            blink_visible,
            ..
        } => caste_vote(display, *selection, *blink_visible),
        UiState::VoteCasted { selection, .. } => vote_casted(display, *selection),
        UiState::Verified { uid, .. } => verified(display, uid),
        UiState::Invalid { uid, .. } => invalid(display, uid),
    }
}
