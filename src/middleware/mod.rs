//! Console middleware
//!
//! Logging helpers around attempts and commands.

pub mod logging;
