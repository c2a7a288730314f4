//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the device traits defined
//! in votekiosk-core, built on the register-level traits of votekiosk-hal:
//!
//! - Two-wire bus transport (start, address, bytes, stop)
//! - SSD1306 text display with a 5x7 font
//! - Potentiometer sampler on a 12-bit ADC
//! - Active-low LED indicator and push-button

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod analog;
pub mod bus;
pub mod button;
pub mod display;
pub mod indicator;

pub use analog::{AdcError, AnalogSampler};
pub use bus::{BusError, BusTransport};
pub use button::ButtonInput;
pub use display::Ssd1306;
pub use indicator::LedIndicator;
