//! Credential verification
//!
//! Real identity checks belong to the hosted backend. `StaticCredentials` is
//! the table-driven stand-in the console ships with.

use std::collections::HashMap;

use super::validator::validate_input;
use crate::error::AuthError;

/// Longest username or password accepted before lookup
pub const MAX_CREDENTIAL_LENGTH: usize = 128;

/// Checks a username/password pair.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError>;
}

/// In-memory credential table loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        validate_input(username, MAX_CREDENTIAL_LENGTH, "username")?;
        validate_input(password, MAX_CREDENTIAL_LENGTH, "password")?;

        // Unknown user and wrong password are reported identically.
        match self.users.get(username) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(AuthError::InvalidCredentials(username.to_string())),
        }
    }
}
