//! Kiosk controller
//!
//! [`Kiosk`] owns every device and all session state (current screen,
//! tally, button tracking, indicator timer). One call to [`Kiosk::tick`] is
//! one pass of the control loop. Each pass blocks for a bounded time and
//! runs its steps in a fixed order:
//!
//! 1. Tag poll (then a short settle delay if a UID was read)
//! 2. Button sample and press handling
//! 3. Tally overlay while a long press from the welcome screen is held
//!    (ends the pass early)
//! 4. Screen timers
//! 5. Ballot: potentiometer sample, arrow blink, redraw
//! 6. Indicator output
//! 7. Loop delay
//!
//! The delays in steps 1, 3 and 7 are the only suspension points.

use embedded_hal::delay::DelayNs;
use votekiosk_hal::Monotonic;

use crate::config::KioskConfig;
use crate::fault;
use crate::identity::IdentityMatcher;
use crate::input::{ButtonEdge, InputDebouncer, PressKind};
use crate::screens;
use crate::selection::Selection;
use crate::state::{Event, ScreenKind, UiState};
use crate::tally::Tally;
use crate::time::{after, deadline_reached, later};
use crate::traits::{AnalogInput, ButtonLine, Indicator, TagPresence, TagReader, TextDisplay};

/// One-time configuration failed; the kiosk cannot run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError<DE, AE> {
    /// Display init or first clear failed
    Display(DE),
    /// Analog converter init failed
    Analog(AE),
}

/// The voting kiosk
pub struct Kiosk<D, A, T, I, B> {
    display: D,
    analog: A,
    tags: T,
    indicator: I,
    button: B,
    config: KioskConfig,
    matcher: IdentityMatcher<'static>,
    state: UiState,
    tally: Tally,
    debouncer: InputDebouncer,
    /// Screen showing when the current button press began
    press_origin: ScreenKind,
    /// Indicator stays lit until this tick
    indicator_until: Option<u32>,
}

impl<D, A, T, I, B> Kiosk<D, A, T, I, B>
where
    D: TextDisplay,
    A: AnalogInput,
    T: TagReader,
    I: Indicator,
    B: ButtonLine,
{
    /// Create a kiosk on the welcome screen with a zero tally
    ///
    /// Nothing is touched until [`Kiosk::start`].
    pub fn new(display: D, analog: A, tags: T, indicator: I, button: B, config: KioskConfig) -> Self {
        Self {
            display,
            analog,
            tags,
            indicator,
            button,
            matcher: IdentityMatcher::new(config.authorized),
            config,
            state: UiState::Welcome,
            tally: Tally::new(),
            debouncer: InputDebouncer::new(),
            press_origin: ScreenKind::Welcome,
            indicator_until: None,
        }
    }

    /// Configure the converter and display, then show the welcome screen
    ///
    /// An error here is fatal; see [`Kiosk::halt`].
    pub fn start<Dl: DelayNs>(
        &mut self,
        delay: &mut Dl,
    ) -> Result<(), StartupError<D::Error, A::Error>> {
        info!("Kiosk starting");
        self.indicator.set_on(false);

        if let Err(e) = self.analog.init() {
            error!("Analog converter init failed");
            return Err(StartupError::Analog(e));
        }
        if let Err(e) = self.display.init(delay).and_then(|()| self.display.clear()) {
            error!("Display init failed");
            return Err(StartupError::Display(e));
        }

        self.state = UiState::Welcome;
        self.draw();
        info!("Kiosk ready, {} authorized tags", self.matcher.len());
        Ok(())
    }

    /// Run one pass of the control loop
    pub fn tick<C: Monotonic, Dl: DelayNs>(&mut self, clock: &C, delay: &mut Dl) {
        let timing = self.config.timing;

        if self.poll_tag(clock) {
            delay.delay_ms(timing.tag_settle_ms);
        }

        let now = clock.now_ms();
        self.sample_button(now);

        if self.show_tally_overlay(now) {
            delay.delay_ms(timing.loop_period_ms);
            return;
        }

        self.expire_screen(now);
        self.update_ballot(now);
        self.drive_indicator(clock.now_ms());

        delay.delay_ms(timing.loop_period_ms);
    }

    /// Run the control loop forever
    pub fn run<C: Monotonic, Dl: DelayNs>(mut self, clock: &C, delay: &mut Dl) -> ! {
        loop {
            self.tick(clock, delay);
        }
    }

    /// Stop and blink the indicator forever
    ///
    /// Interrupts should already be disabled by the caller.
    pub fn halt<Dl: DelayNs>(mut self, delay: &mut Dl) -> ! {
        fault::halt_blinking(&mut self.indicator, delay)
    }

    /// Current UI state
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Votes recorded this session
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Active configuration
    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    /// The display driver
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The indicator output
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Poll the reader; returns true if a UID was read
    ///
    /// Every successful read extends the indicator window. Only the welcome
    /// screen reacts to the tag itself.
    fn poll_tag<C: Monotonic>(&mut self, clock: &C) -> bool {
        if self.tags.poll() != TagPresence::Present {
            return false;
        }
        let uid = match self.tags.read_uid() {
            Ok(uid) => uid,
            Err(e) => {
                debug!("Tag read failed: {}", e);
                return false;
            }
        };

        let now = clock.now_ms();
        let window = after(now, self.config.timing.indicator_min_on_ms);
        self.indicator_until = Some(match self.indicator_until {
            Some(until) => later(until, window),
            None => window,
        });

        if self.state.accepts_tags() {
            let event = if self.matcher.is_authorized(&uid) {
                info!("Tag {} accepted", uid);
                Event::TagAuthorized(uid)
            } else {
                info!("Tag {} rejected", uid);
                Event::TagRejected(uid)
            };
            self.enter(event, now);
        } else {
            debug!("Tag {} ignored on {} screen", uid, self.state.kind());
        }
        true
    }

    fn sample_button(&mut self, now: u32) {
        let pressed = self.button.is_pressed();
        match self.debouncer.sample(pressed, now) {
            Some(ButtonEdge::Pressed) => {
                self.press_origin = self.state.kind();
            }
            Some(ButtonEdge::Released { held_ms }) => {
                match PressKind::classify(held_ms, self.config.timing.long_press_ms) {
                    PressKind::Long => {
                        if self.press_origin == ScreenKind::Welcome {
                            let origin = self.press_origin;
                            self.enter(Event::LongPressReleased { origin }, now);
                        }
                    }
                    PressKind::Short => {
                        if let UiState::CasteVote { selection, .. } = self.state {
                            self.tally.record(selection);
                            info!(
                                "Vote cast for {}, now {}",
                                selection,
                                self.tally.count(selection)
                            );
                        }
                        self.enter(Event::ShortPress, now);
                    }
                }
            }
            None => {}
        }
    }

    /// Redraw the tally while a long press from the welcome screen is held
    fn show_tally_overlay(&mut self, now: u32) -> bool {
        let long_hold = match self.debouncer.held_ms(now) {
            Some(held) => {
                PressKind::classify(held, self.config.timing.long_press_ms) == PressKind::Long
            }
            None => false,
        };
        if !long_hold || self.press_origin != ScreenKind::Welcome {
            return false;
        }
        if screens::tally_overlay(&mut self.display, &self.tally).is_err() {
            warn!("Tally overlay render failed; frame may be partial");
        }
        true
    }

    fn expire_screen(&mut self, now: u32) {
        if !self.state.is_expired(now) {
            return;
        }
        let event = if self.state.kind() == ScreenKind::Verified {
            Event::VotingOpened(self.sample_selection())
        } else {
            Event::ScreenExpired
        };
        self.enter(event, now);
    }

    fn update_ballot(&mut self, now: u32) {
        if self.state.kind() != ScreenKind::CasteVote {
            return;
        }
        let timing = self.config.timing;
        let sampled = self.sample_selection();
        self.state = self
            .state
            .transition(Event::SelectionSampled(sampled), now, &timing);
        if self.state.blink_due(now) {
            self.state = self.state.transition(Event::BlinkElapsed, now, &timing);
        }
        self.draw();
    }

    fn drive_indicator(&mut self, now: u32) {
        let on = match self.indicator_until {
            Some(until) => !deadline_reached(now, until),
            None => false,
        };
        self.indicator.set_on(on);
    }

    fn sample_selection(&mut self) -> Selection {
        let raw = self.analog.read_raw();
        self.config.thresholds.select(raw)
    }

    /// Apply an event and draw the resulting screen
    fn enter(&mut self, event: Event, now: u32) {
        let next = self.state.transition(event, now, &self.config.timing);
        if next.kind() != self.state.kind() {
            debug!("{} -> {}", self.state.kind(), next.kind());
        }
        self.state = next;
        self.draw();
    }

    fn draw(&mut self) {
        if screens::render(&mut self.display, &self.state).is_err() {
            warn!(
                "Render of {} screen failed; frame may be partial",
                self.state.kind()
            );
        }
    }
}
