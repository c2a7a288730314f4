//! STM32F4-specific HAL for the Votekiosk firmware
//!
//! Implements the `votekiosk-hal` register traits on STM32F4 parts and wires
//! up the reference board:
//!
//! - I2C1 on PB6 (SCL) / PB7 (SDA) driving the SSD1306
//! - ADC1 channel 1 on PA1 reading the potentiometer
//! - PA0 push-button to ground, internal pull-up
//! - PC13 LED, active-low
//!
//! # Features
//!
//! - `stm32f401cc`, `stm32f411ce` - Chip selection
//! - `defmt` - Enable debug formatting support
//!
//! Pin muxing and bus timing go through embassy-stm32; every flag wait in
//! normal operation is done at register level by the drivers crate.

#![no_std]

pub mod adc;
pub mod board;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod i2c;

pub use board::Board;
pub use clock::EmbassyClock;
pub use delay::CycleDelay;
