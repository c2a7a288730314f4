//! Text display trait

use embedded_hal::delay::DelayNs;

/// Monochrome page-addressed text display
///
/// The screen is 8 pages (rows of 8 pixels) by 128 columns. Text is drawn
/// straight to the panel; there is no frame buffer to flush.
pub trait TextDisplay {
    /// Error type for display operations
    type Error;

    /// Run the one-time configuration sequence
    ///
    /// `delay` covers the panel power-up settle time.
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Zero every pixel
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Draw text starting at a pixel column on a page
    ///
    /// - `page`: Page number (0-7)
    /// - `column`: Pixel column (0-127)
    /// - `text`: Text to display; wraps to the next page at the right edge
    fn print_at(&mut self, page: u8, column: u8, text: &str) -> Result<(), Self::Error>;
}
