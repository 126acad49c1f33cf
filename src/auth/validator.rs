//! Input validation
//!
//! Basic sanitation for anything typed into the console before it is
//! compared or stored.

use crate::error::AuthError;

/// Checks for empty, oversized, or control-character-laden input.
pub fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

pub(crate) fn validate_input(input: &str, max_length: usize, field: &str) -> Result<(), AuthError> {
    if is_valid_input(input, max_length) {
        Ok(())
    } else {
        Err(AuthError::MalformedInput(format!("Invalid {field} format")))
    }
}
