//! Monotonic time source

/// Free-running millisecond counter supplied by the host environment
///
/// The counter wraps at `u32::MAX`; consumers compare deadlines with
/// wrapping arithmetic.
pub trait Monotonic {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;
}
