//! Board-agnostic core logic for the voting kiosk
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device traits (text display, analog input, tag reader, indicator, button)
//! - Identity matching against the authorized tag list
//! - Potentiometer-to-candidate selection and the vote tally
//! - Button edge detection and short/long press classification
//! - The UI state machine and the screens it renders
//! - The kiosk controller that runs the polling loop
//! - Build-time configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod config;
pub mod fault;
pub mod identity;
pub mod input;
pub mod kiosk;
pub mod screens;
pub mod selection;
pub mod state;
pub mod tally;
pub mod time;
pub mod traits;

pub use config::{KioskConfig, Timing};
pub use identity::{IdentityMatcher, Uid};
pub use kiosk::{Kiosk, StartupError};
pub use selection::{Selection, Thresholds};
pub use state::{Event, ScreenKind, UiState};
pub use tally::Tally;
