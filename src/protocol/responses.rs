//! Console response handling
//!
//! Defines response codes and formatting.

pub const OK: u16 = 200;
pub const STATUS: u16 = 211;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const LOGGED_IN: u16 = 230;
pub const UNAVAILABLE: u16 = 421;
pub const TOO_MANY_ATTEMPTS: u16 = 429;
pub const UNKNOWN_COMMAND: u16 = 500;
pub const BAD_ARGUMENTS: u16 = 501;
pub const AUTH_FAILED: u16 = 530;

/// Format a console response line
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\r\n", code, message)
}
