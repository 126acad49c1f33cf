//! Error types
//!
//! The limiter itself cannot fail; these cover everything around it.

use std::fmt;
use std::io;

/// Credential check errors
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials(String),
    MalformedInput(String),
    NotLoggedIn,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials(u) => write!(f, "Invalid credentials for user: {}", u),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::NotLoggedIn => write!(f, "User not logged in"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Top-level error for the login console
#[derive(Debug)]
pub enum ThrottleError {
    Config(::config::ConfigError),
    Io(io::Error),
    Auth(AuthError),
    Protocol(String),
}

impl fmt::Display for ThrottleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrottleError::Config(e) => write!(f, "Configuration error: {}", e),
            ThrottleError::Io(e) => write!(f, "I/O error: {}", e),
            ThrottleError::Auth(e) => write!(f, "Authentication error: {}", e),
            ThrottleError::Protocol(e) => write!(f, "Protocol error: {}", e),
        }
    }
}

impl std::error::Error for ThrottleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThrottleError::Config(e) => Some(e),
            ThrottleError::Io(e) => Some(e),
            ThrottleError::Auth(e) => Some(e),
            ThrottleError::Protocol(_) => None,
        }
    }
}

impl From<::config::ConfigError> for ThrottleError {
    fn from(error: ::config::ConfigError) -> Self {
        ThrottleError::Config(error)
    }
}

impl From<io::Error> for ThrottleError {
    fn from(error: io::Error) -> Self {
        ThrottleError::Io(error)
    }
}

impl From<AuthError> for ThrottleError {
    fn from(error: AuthError) -> Self {
        ThrottleError::Auth(error)
    }
}
