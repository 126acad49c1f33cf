//! Session result types
//!
//! Defines result structures returned by session operations.

use crate::error::AuthError;

/// Result of a LOGIN submission
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn { username: String, display_name: String },
    Rejected(AuthError),
    Throttled { remaining_ms: u64 },
}

/// Snapshot reported by STATUS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStatus {
    pub username: Option<String>,
    pub recorded_attempts: usize,
    pub max_attempts: u32,
    pub remaining_block_ms: u64,
}
