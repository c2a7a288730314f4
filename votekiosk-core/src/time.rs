//! Millisecond deadline arithmetic
//!
//! The host tick counter is a wrapping `u32`. Deadlines are compared by
//! signed distance so they keep working across the ~49.7 day wrap, provided
//! no deadline is set more than `i32::MAX` ms ahead.

/// Deadline `ms` milliseconds after `now`
pub const fn after(now: u32, ms: u32) -> u32 {
    now.wrapping_add(ms)
}

/// True once `now` is at or past `deadline`
pub const fn deadline_reached(now: u32, deadline: u32) -> bool {
    now.wrapping_sub(deadline) as i32 >= 0
}

/// Later of two deadlines
pub const fn later(a: u32, b: u32) -> u32 {
    if deadline_reached(a, b) {
        a
    } else {
        b
    }
}
