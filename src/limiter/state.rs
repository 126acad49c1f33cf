//! Limiter state
//!
//! Plain owned fields mutated only by `RateLimiter::check_and_record_attempt`.

use super::clock::Timestamp;

/// Recorded attempts and block status for one limiter.
///
/// `block_end_time` is `Some` exactly while `is_blocked` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimiterState {
    pub(crate) attempts: Vec<Timestamp>,
    pub(crate) is_blocked: bool,
    pub(crate) block_end_time: Option<Timestamp>,
}

impl RateLimiterState {
    /// Timestamps of recorded attempts, oldest first.
    pub fn attempts(&self) -> &[Timestamp] {
        &self.attempts
    }

    pub fn is_blocked(&self) -> bool {
        self.is_blocked
    }

    pub fn block_end_time(&self) -> Option<Timestamp> {
        self.block_end_time
    }

    pub(crate) fn block_until(&mut self, end: Timestamp) {
        self.is_blocked = true;
        self.block_end_time = Some(end);
    }

    /// Lifts the block and forgets every recorded attempt.
    pub(crate) fn reset(&mut self) {
        self.is_blocked = false;
        self.block_end_time = None;
        self.attempts.clear();
    }

    /// Drops attempts at or before `window_start`.
    pub(crate) fn prune(&mut self, window_start: Timestamp) {
        self.attempts.retain(|&time| time > window_start);
    }
}
