//! Kiosk UI state machine
//!
//! Defines which screen is showing and how it changes. The machine is
//! explicit, finite and deterministic: the next state is a pure function of
//! the current state, an event and the current tick.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{ScreenKind, UiState};
