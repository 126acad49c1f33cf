//! Error handling
//!
//! Defines error types and handling for the login console.

pub mod handlers;
pub mod types;

pub use types::*;
