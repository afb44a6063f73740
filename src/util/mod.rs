//! Utility modules: debounce timer, timeout.

pub mod debounce;
pub mod timeout;

pub use debounce::Debouncer;
