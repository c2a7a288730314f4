//! Hardware abstraction traits
//!
//! These traits define the interface between the kiosk logic and the
//! device drivers. Every method is a blocking call with a bounded duration.

pub mod analog;
pub mod display;
pub mod io;
pub mod tag;

pub use analog::AnalogInput;
pub use display::TextDisplay;
pub use io::{ButtonLine, Indicator};
pub use tag::{TagError, TagPresence, TagReader};
