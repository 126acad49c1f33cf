//! Error handlers
//!
//! Logging and response-code mapping for console errors.

use crate::error::types::{AuthError, ThrottleError};
use crate::protocol::responses;
use log::error;

/// Handle a console error
pub fn handle_error(err: &ThrottleError) {
    error!("Login console error: {}", err);
}

/// Convert error to console response code
pub fn error_to_code(err: &ThrottleError) -> u16 {
    match err {
        ThrottleError::Auth(AuthError::MalformedInput(_)) => responses::BAD_ARGUMENTS,
        ThrottleError::Auth(_) => responses::AUTH_FAILED,
        ThrottleError::Config(_) => responses::UNAVAILABLE,
        ThrottleError::Io(_) => responses::UNAVAILABLE,
        ThrottleError::Protocol(_) => responses::UNKNOWN_COMMAND,
    }
}
