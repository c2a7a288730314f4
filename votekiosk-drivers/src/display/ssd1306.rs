//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays over a polling I2C bus.
//! Every command goes out as its own two-byte transaction; pixel data is
//! split into transactions of at most [`DISPLAY_CHUNK_LEN`] bytes.

use embedded_hal::delay::DelayNs;
use votekiosk_core::config::{DISPLAY_ADDRESS, DISPLAY_CHUNK_LEN};
use votekiosk_core::traits::TextDisplay;
use votekiosk_core::{debug, warn};
use votekiosk_hal::i2c::I2cBus;

use super::font::{self, CELL_WIDTH, GLYPH_WIDTH};
use super::{PAGES, WIDTH};

/// Controller settle time after power-up before the first command
const POWER_UP_DELAY_MS: u32 = 10;

/// Last column a character cell may start at
const LAST_CELL_COLUMN: u8 = (WIDTH - CELL_WIDTH) as u8;

/// Control byte ahead of a command
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte ahead of display data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Power-up configuration, in the order the controller expects it
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_ADDRESSING_MODE,
    0x00,                  // Horizontal
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF,
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

const BLANK_PAGE: [u8; WIDTH] = [0; WIDTH];

/// SSD1306 text display
pub struct Ssd1306<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> Ssd1306<B> {
    /// Create a driver for a panel at the usual address
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DISPLAY_ADDRESS)
    }

    /// Create a driver for a panel at a 7-bit `address`
    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.bus
    }

    fn command(&mut self, command: u8) -> Result<(), B::Error> {
        self.bus.write(self.address, &[CONTROL_COMMAND, command])
    }

    /// Stream display data; a failed chunk abandons the rest
    fn data(&mut self, bytes: &[u8]) -> Result<(), B::Error> {
        let mut frame = [0u8; DISPLAY_CHUNK_LEN + 1];
        frame[0] = CONTROL_DATA;
        for chunk in bytes.chunks(DISPLAY_CHUNK_LEN) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.bus.write(self.address, &frame[..=chunk.len()])?;
        }
        Ok(())
    }

    fn set_position(&mut self, page: u8, column: u8) -> Result<(), B::Error> {
        self.command(cmd::SET_PAGE_ADDR | (page & 0x07))?;
        self.command(cmd::SET_LOW_COLUMN | (column & 0x0F))?;
        self.command(cmd::SET_HIGH_COLUMN | ((column >> 4) & 0x0F))
    }

    fn draw_char(&mut self, page: u8, column: u8, ch: char) -> Result<(), B::Error> {
        let mut cell = [0u8; CELL_WIDTH];
        cell[..GLYPH_WIDTH].copy_from_slice(font::glyph(ch));
        self.set_position(page, column)?;
        self.data(&cell)
    }

    fn clear_page(&mut self, page: u8) -> Result<(), B::Error> {
        self.set_position(page, 0)?;
        self.data(&BLANK_PAGE)
    }
}

impl<B: I2cBus> TextDisplay for Ssd1306<B> {
    type Error = B::Error;

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        delay.delay_ms(POWER_UP_DELAY_MS);
        for &command in INIT_SEQUENCE {
            self.command(command)?;
        }
        debug!("SSD1306 at {=u8:#x} configured", self.address);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        let mut first = Ok(());
        for page in 0..PAGES {
            if let Err(e) = self.clear_page(page) {
                warn!("Clear of page {} aborted", page);
                if first.is_ok() {
                    first = Err(e);
                }
            }
        }
        first
    }

    fn print_at(&mut self, page: u8, column: u8, text: &str) -> Result<(), Self::Error> {
        let mut first = Ok(());
        let (mut page, mut column) = (page, column);
        for ch in text.chars() {
            if column > LAST_CELL_COLUMN {
                column = 0;
                page = page.wrapping_add(1) % PAGES;
            }
            let drawn = self.draw_char(page, column, ch);
            if first.is_ok() {
                first = drawn;
            }
            column = column.saturating_add(CELL_WIDTH as u8);
        }
        first
    }
}
