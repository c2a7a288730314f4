//! End-to-end kiosk sessions against simulated devices and a simulated clock

use std::cell::Cell;

use embedded_hal::delay::DelayNs;
use votekiosk_core::traits::{
    AnalogInput, ButtonLine, Indicator, TagError, TagPresence, TagReader, TextDisplay,
};
use votekiosk_core::{Kiosk, KioskConfig, ScreenKind, Selection, Uid, UiState};
use votekiosk_hal::Monotonic;

const ACCEPTED: Uid = Uid::new([0x73, 0x91, 0xB1, 0x28, 0x7B]);
const ALSO_ACCEPTED: Uid = Uid::new([0x96, 0x7C, 0x41, 0x1E, 0xB5]);
const UNKNOWN: Uid = Uid::new([0x01, 0x02, 0x03, 0x04, 0x05]);

/// Keeps the text of the current frame
#[derive(Default)]
struct Screen {
    frame: Vec<(u8, u8, String)>,
    renders: u32,
}

impl Screen {
    fn shows(&self, text: &str) -> bool {
        self.frame.iter().any(|(_, _, t)| t == text)
    }

    fn text_at(&self, page: u8, column: u8) -> Option<&str> {
        self.frame
            .iter()
            .find(|(p, c, _)| *p == page && *c == column)
            .map(|(_, _, t)| t.as_str())
    }
}

impl TextDisplay for Screen {
    type Error = ();

    fn init<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), ()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ()> {
        self.frame.clear();
        self.renders += 1;
        Ok(())
    }

    fn print_at(&mut self, page: u8, column: u8, text: &str) -> Result<(), ()> {
        self.frame.push((page, column, text.to_string()));
        Ok(())
    }
}

struct Pot<'a>(&'a Cell<u16>);

impl AnalogInput for Pot<'_> {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn read_raw(&mut self) -> u16 {
        self.0.get()
    }
}

/// Presents a tag for exactly one read
struct Antenna<'a>(&'a Cell<Option<Uid>>);

impl TagReader for Antenna<'_> {
    fn poll(&mut self) -> TagPresence {
        match self.0.get() {
            Some(_) => TagPresence::Present,
            None => TagPresence::Absent,
        }
    }

    fn read_uid(&mut self) -> Result<Uid, TagError> {
        self.0.take().ok_or(TagError::NoResponse)
    }
}

#[derive(Default)]
struct Led {
    on: bool,
}

impl Indicator for Led {
    fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

struct Button<'a>(&'a Cell<bool>);

impl ButtonLine for Button<'_> {
    fn is_pressed(&self) -> bool {
        self.0.get()
    }
}

struct SimClock<'a>(&'a Cell<u32>);

impl Monotonic for SimClock<'_> {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// Delays advance the simulated clock
struct SimDelay<'a>(&'a Cell<u32>);

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get().wrapping_add(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

type BenchKiosk<'a> = Kiosk<Screen, Pot<'a>, Antenna<'a>, Led, Button<'a>>;

struct Bench {
    now: Cell<u32>,
    pot: Cell<u16>,
    tag: Cell<Option<Uid>>,
    pressed: Cell<bool>,
}

impl Bench {
    fn new() -> Self {
        Self::starting_at(0)
    }

    fn starting_at(now: u32) -> Self {
        Self {
            now: Cell::new(now),
            pot: Cell::new(0),
            tag: Cell::new(None),
            pressed: Cell::new(false),
        }
    }

    fn boot(&self) -> BenchKiosk<'_> {
        let mut kiosk = Kiosk::new(
            Screen::default(),
            Pot(&self.pot),
            Antenna(&self.tag),
            Led::default(),
            Button(&self.pressed),
            KioskConfig::DEFAULT,
        );
        kiosk
            .start(&mut SimDelay(&self.now))
            .expect("simulated devices never fail");
        kiosk
    }

    fn now(&self) -> u32 {
        self.now.get()
    }

    fn tick(&self, kiosk: &mut BenchKiosk<'_>) {
        kiosk.tick(&SimClock(&self.now), &mut SimDelay(&self.now));
    }

    /// Tick until at least `ms` of simulated time has passed
    fn run_for(&self, kiosk: &mut BenchKiosk<'_>, ms: u32) {
        let start = self.now();
        while self.now().wrapping_sub(start) < ms {
            self.tick(kiosk);
        }
    }

    fn scan(&self, kiosk: &mut BenchKiosk<'_>, uid: Uid) {
        self.tag.set(Some(uid));
        self.tick(kiosk);
    }

    /// Hold the button for `ms`, then release it on the next tick
    fn press(&self, kiosk: &mut BenchKiosk<'_>, ms: u32) {
        self.pressed.set(true);
        self.run_for(kiosk, ms);
        self.pressed.set(false);
        self.tick(kiosk);
    }

    /// Scan an accepted tag and wait for the ballot to open
    fn open_ballot(&self, kiosk: &mut BenchKiosk<'_>) {
        self.scan(kiosk, ACCEPTED);
        self.run_for(kiosk, 3000);
        assert_eq!(kiosk.state().kind(), ScreenKind::CasteVote);
    }
}

#[test]
fn accepted_tag_opens_ballot_after_hold() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    assert!(kiosk.display().shows("WELCOME"));

    bench.pot.set(3500);
    bench.scan(&mut kiosk, ACCEPTED);
    assert_eq!(
        *kiosk.state(),
        UiState::Verified {
            uid: ACCEPTED,
            until: 3000
        }
    );
    assert_eq!(kiosk.display().text_at(1, 8), Some("VOTER ID VERIFIED"));
    assert_eq!(kiosk.display().text_at(4, 10), Some("UID:73 91 B1 28 7B"));

    // Still verified right up to the deadline
    while bench.now() < 3000 {
        assert_eq!(kiosk.state().kind(), ScreenKind::Verified);
        bench.tick(&mut kiosk);
    }
    assert_eq!(kiosk.state().kind(), ScreenKind::Verified);

    bench.tick(&mut kiosk);
    assert_eq!(kiosk.state().selection(), Some(Selection::CandidateC));
    assert_eq!(kiosk.display().text_at(0, 8), Some("CASTE VOTE"));
    assert_eq!(kiosk.display().text_at(4, 2), Some(">"));
}

#[test]
fn second_reference_tag_is_accepted() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, ALSO_ACCEPTED);
    assert_eq!(kiosk.state().kind(), ScreenKind::Verified);
    assert!(kiosk.display().shows("UID:96 7C 41 1E B5"));
}

#[test]
fn unknown_tag_returns_to_welcome() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, UNKNOWN);
    assert_eq!(kiosk.state().kind(), ScreenKind::Invalid);
    assert!(kiosk.display().shows("VOTER ID INVALID"));
    assert!(kiosk.display().shows("UID:01 02 03 04 05"));

    bench.run_for(&mut kiosk, 3000);
    assert_eq!(*kiosk.state(), UiState::Welcome);
    assert!(kiosk.display().shows("WELCOME"));
}

#[test]
fn potentiometer_bands_select_candidates() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.open_ballot(&mut kiosk);

    for (raw, expected) in [
        (500, Selection::CandidateA),
        (2000, Selection::CandidateB),
        (3500, Selection::CandidateC),
    ] {
        bench.pot.set(raw);
        bench.tick(&mut kiosk);
        assert_eq!(kiosk.state().selection(), Some(expected));
    }
}

#[test]
fn short_press_casts_vote() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.pot.set(2000);
    bench.open_ballot(&mut kiosk);
    assert_eq!(kiosk.state().selection(), Some(Selection::CandidateB));

    bench.press(&mut kiosk, 100);
    assert!(matches!(
        kiosk.state(),
        UiState::VoteCasted {
            selection: Selection::CandidateB,
            ..
        }
    ));
    assert_eq!(kiosk.tally().count(Selection::CandidateB), 1);
    assert_eq!(kiosk.tally().total(), 1);
    assert_eq!(kiosk.display().text_at(2, 10), Some("CASTED"));
    assert_eq!(kiosk.display().text_at(4, 8), Some("CAND B"));

    bench.run_for(&mut kiosk, 3000);
    assert_eq!(*kiosk.state(), UiState::Welcome);
}

#[test]
fn long_hold_on_welcome_shows_counts() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.pot.set(0);
    bench.open_ballot(&mut kiosk);
    bench.press(&mut kiosk, 40);
    bench.run_for(&mut kiosk, 3000);
    assert_eq!(*kiosk.state(), UiState::Welcome);

    bench.pressed.set(true);
    bench.run_for(&mut kiosk, 900);
    assert!(!kiosk.display().shows("VOTE COUNTS"));

    // Overlay is redrawn every tick while held
    bench.run_for(&mut kiosk, 200);
    assert!(kiosk.display().shows("VOTE COUNTS"));
    let renders = kiosk.display().renders;
    bench.run_for(&mut kiosk, 100);
    assert!(kiosk.display().renders >= renders + 5);
    assert_eq!(kiosk.display().text_at(2, 6), Some("A: 1"));
    assert_eq!(kiosk.display().text_at(3, 6), Some("B: 0"));
    assert_eq!(kiosk.display().text_at(4, 6), Some("C: 0"));
    assert_eq!(*kiosk.state(), UiState::Welcome);

    bench.pressed.set(false);
    bench.tick(&mut kiosk);
    assert_eq!(*kiosk.state(), UiState::Welcome);
    assert!(kiosk.display().shows("WELCOME"));
    assert!(!kiosk.display().shows("VOTE COUNTS"));
}

#[test]
fn tally_counts_every_cast_exactly() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    let ballots = [
        (100, Selection::CandidateA),
        (3000, Selection::CandidateC),
        (2000, Selection::CandidateB),
        (4095, Selection::CandidateC),
        (3999, Selection::CandidateC),
    ];

    for (raw, _) in ballots {
        bench.pot.set(raw);
        bench.open_ballot(&mut kiosk);
        bench.press(&mut kiosk, 60);
        bench.run_for(&mut kiosk, 3000);
        assert_eq!(*kiosk.state(), UiState::Welcome);
    }

    assert_eq!(kiosk.tally().count(Selection::CandidateA), 1);
    assert_eq!(kiosk.tally().count(Selection::CandidateB), 1);
    assert_eq!(kiosk.tally().count(Selection::CandidateC), 3);
    assert_eq!(kiosk.tally().total(), ballots.len() as u64);
}

#[test]
fn long_press_on_ballot_is_ignored() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.open_ballot(&mut kiosk);

    bench.press(&mut kiosk, 1500);
    assert_eq!(kiosk.state().kind(), ScreenKind::CasteVote);
    assert!(!kiosk.display().shows("VOTE COUNTS"));
    assert_eq!(kiosk.tally().total(), 0);
}

#[test]
fn short_press_abandons_verified_screen() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, ACCEPTED);
    bench.press(&mut kiosk, 100);
    assert_eq!(*kiosk.state(), UiState::Welcome);
    assert_eq!(kiosk.tally().total(), 0);
}

#[test]
fn scan_outside_welcome_only_lights_indicator() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.pot.set(2000);
    bench.open_ballot(&mut kiosk);
    bench.run_for(&mut kiosk, 300);
    assert!(!kiosk.indicator().is_on());

    let before = *kiosk.state();
    bench.scan(&mut kiosk, UNKNOWN);
    assert_eq!(kiosk.state().kind(), ScreenKind::CasteVote);
    assert_eq!(kiosk.state().selection(), before.selection());
    assert!(kiosk.indicator().is_on());
}

#[test]
fn indicator_stays_on_for_minimum_window() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, UNKNOWN);
    assert!(kiosk.indicator().is_on());

    // Read at t=0, so the window closes at t=200
    while bench.now() < 200 {
        assert!(kiosk.indicator().is_on());
        bench.tick(&mut kiosk);
    }
    bench.tick(&mut kiosk);
    assert!(!kiosk.indicator().is_on());
}

#[test]
fn indicator_window_extends_on_repeat_scan() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, UNKNOWN);
    while bench.now() < 150 {
        bench.tick(&mut kiosk);
    }

    // Second read lands before the first window closes at t=200
    let second = bench.now();
    bench.scan(&mut kiosk, UNKNOWN);
    assert_eq!(kiosk.state().kind(), ScreenKind::Invalid);
    assert!(bench.now() > 200);
    while bench.now() < second + 200 {
        assert!(kiosk.indicator().is_on());
        bench.tick(&mut kiosk);
    }
    bench.tick(&mut kiosk);
    assert!(!kiosk.indicator().is_on());
}

fn arrow_visible(kiosk: &BenchKiosk<'_>) -> bool {
    match kiosk.state() {
        UiState::CasteVote { blink_visible, .. } => *blink_visible,
        other => panic!("left the ballot for {:?}", other),
    }
}

#[test]
fn ballot_arrow_blinks_every_half_second() {
    let bench = Bench::new();
    let mut kiosk = bench.boot();
    bench.open_ballot(&mut kiosk);
    assert_eq!(kiosk.state().selection(), Some(Selection::CandidateA));

    let mut shown = arrow_visible(&kiosk);
    assert!(shown);
    assert_eq!(kiosk.display().text_at(2, 2), Some(">"));

    let mut flips = Vec::new();
    let start = bench.now();
    while bench.now() - start < 2100 {
        let tick_start = bench.now();
        bench.tick(&mut kiosk);
        if arrow_visible(&kiosk) != shown {
            shown = !shown;
            flips.push(tick_start);
        }
        let glyph = if shown { ">" } else { " " };
        assert_eq!(kiosk.display().text_at(2, 2), Some(glyph));
    }

    assert_eq!(flips.len(), 4);
    for pair in flips.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((500..520).contains(&gap), "arrow toggled after {} ms", gap);
    }
}

#[test]
fn deadlines_survive_clock_wrap() {
    let bench = Bench::starting_at(u32::MAX - 1000);
    let mut kiosk = bench.boot();
    bench.scan(&mut kiosk, UNKNOWN);
    assert_eq!(kiosk.state().kind(), ScreenKind::Invalid);

    bench.run_for(&mut kiosk, 2000);
    assert_eq!(kiosk.state().kind(), ScreenKind::Invalid);
    bench.run_for(&mut kiosk, 1100);
    assert_eq!(*kiosk.state(), UiState::Welcome);
}
