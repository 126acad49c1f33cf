//! Utility functions
//!
//! Small helpers shared across the console.

pub mod format;

pub use format::format_remaining;
