//! Votekiosk Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits implemented by
//! chip-specific HALs. The drivers crate builds the bus transport, display
//! and analog sampler on top of these, so the kiosk logic never touches a
//! register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  votekiosk-core (state machine, UI)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  votekiosk-drivers (SSD1306, ADC, LED)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  votekiosk-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  votekiosk-hal-stm32f4                  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cRegisters`] - Two-wire peripheral status/control flags
//! - [`i2c::I2cBus`] - Whole-transaction two-wire writes
//! - [`adc::AdcRegisters`] - Single-shot analog conversion
//! - [`clock::Monotonic`] - Millisecond tick counter
//!
//! Every peripheral wait goes through [`poll::poll_until`], which bounds the
//! number of flag reads so a stalled peripheral cannot hang the control loop.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod i2c;
pub mod poll;

// Re-export key traits at crate root for convenience
pub use adc::AdcRegisters;
pub use clock::Monotonic;
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cRegisters};
pub use poll::{poll_until, PollTimeout};
