//! Text display drivers
//!
//! 128x64 monochrome panel addressed as 8 pages of 8 pixel rows. Text is
//! drawn straight to panel RAM one 6-column character cell at a time; there
//! is no frame buffer on the controller side.

pub mod font;
mod ssd1306;

pub use ssd1306::Ssd1306;

/// Panel width in columns
pub const WIDTH: usize = 128;

/// Number of 8-row pages
pub const PAGES: u8 = 8;
