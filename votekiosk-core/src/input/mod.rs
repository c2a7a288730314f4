//! Button input handling

pub mod debounce;

pub use debounce::{ButtonEdge, InputDebouncer, PressKind};
