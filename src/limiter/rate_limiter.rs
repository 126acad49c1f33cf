//! Sliding-window rate limiter
//!
//! Counts attempts inside a rolling window and blocks further attempts for a
//! fixed duration once `max_attempts` is reached. When a block expires the
//! window starts over from nothing rather than being recomputed.

use log::{debug, info};

use super::clock::{Clock, SystemClock};
use super::state::RateLimiterState;
use crate::config::LimiterConfig;

/// Attempt limiter for a single protected action.
///
/// Callers sharing one limiter must serialize access; `check_and_record_attempt`
/// takes `&mut self` and there is no internal locking.
#[derive(Debug)]
pub struct RateLimiter<C: Clock = SystemClock> {
    config: LimiterConfig,
    clock: C,
    state: RateLimiterState,
}

impl RateLimiter<SystemClock> {
    pub fn new(config: LimiterConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(config: LimiterConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            state: RateLimiterState::default(),
        }
    }

    /// Records an attempt if it is permitted.
    ///
    /// Returns `false` while blocked, or when the window already holds
    /// `max_attempts` entries, in which case a block starts now. Rejected
    /// attempts are never recorded.
    pub fn check_and_record_attempt(&mut self) -> bool {
        let now = self.clock.now_millis();

        if self.state.is_blocked {
            match self.state.block_end_time {
                Some(end) if now < end => return false,
                _ => {
                    info!("Attempt block lifted at {}", now);
                    self.state.reset();
                }
            }
        }

        let window_start = now.saturating_sub_unsigned(self.config.window_ms);
        self.state.prune(window_start);

        if self.state.attempts.len() >= self.config.max_attempts as usize {
            let end = now.saturating_add_unsigned(self.config.block_duration_ms);
            self.state.block_until(end);
            info!(
                "Attempt limit of {} reached, blocking until {}",
                self.config.max_attempts, end
            );
            return false;
        }

        self.state.attempts.push(now);
        debug!(
            "Attempt recorded ({}/{})",
            self.state.attempts.len(),
            self.config.max_attempts
        );
        true
    }

    /// Milliseconds until the current block lifts, `0` when not blocked.
    ///
    /// Read-only: an expired block stays flagged until the next check.
    pub fn remaining_block_time(&self) -> u64 {
        if !self.state.is_blocked {
            return 0;
        }
        let now = self.clock.now_millis();
        match self.state.block_end_time {
            Some(end) if end > now => end.abs_diff(now),
            _ => 0,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.state.is_blocked
    }

    pub fn state(&self) -> &RateLimiterState {
        &self.state
    }

    pub fn config(&self) -> &LimiterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limiter::ManualClock;

    fn limiter(max_attempts: u32, window_ms: u64, block_ms: u64) -> (RateLimiter<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let config = LimiterConfig {
            max_attempts,
            window_ms,
            block_duration_ms: block_ms,
        };
        (RateLimiter::with_clock(config, clock.clone()), clock)
    }

    #[test]
    fn test_login_scenario() {
        let (mut limiter, clock) = limiter(3, 60_000, 30_000);

        for t in [0, 1_000, 2_000] {
            clock.set(t);
            assert!(limiter.check_and_record_attempt(), "attempt at {t}");
        }

        clock.set(3_000);
        assert!(!limiter.check_and_record_attempt());
        assert!(limiter.is_blocked());
        assert_eq!(limiter.state().block_end_time(), Some(33_000));
        assert_eq!(limiter.remaining_block_time(), 30_000);
        assert_eq!(limiter.state().attempts(), &[0, 1_000, 2_000]);

        clock.set(33_000);
        assert!(limiter.check_and_record_attempt());
        assert!(!limiter.is_blocked());
        assert_eq!(limiter.state().attempts(), &[33_000]);
    }

    #[test]
    fn test_attempts_spaced_beyond_window_never_block() {
        let (mut limiter, clock) = limiter(1, 1_000, 10_000);

        for i in 0..20 {
            clock.set(i * 1_001);
            assert!(limiter.check_and_record_attempt());
            assert_eq!(limiter.state().attempts().len(), 1);
        }
    }

    #[test]
    fn test_attempt_exactly_at_window_edge_is_pruned() {
        let (mut limiter, clock) = limiter(1, 1_000, 5_000);

        assert!(limiter.check_and_record_attempt());
        clock.set(1_000);
        assert!(limiter.check_and_record_attempt());
        assert_eq!(limiter.state().attempts(), &[1_000]);
    }

    #[test]
    fn test_blocked_calls_do_not_change_state() {
        let (mut limiter, clock) = limiter(2, 60_000, 10_000);

        assert!(limiter.check_and_record_attempt());
        assert!(limiter.check_and_record_attempt());
        assert!(!limiter.check_and_record_attempt());
        let snapshot = limiter.state().clone();

        for t in [1, 5_000, 9_999] {
            clock.set(t);
            assert!(!limiter.check_and_record_attempt());
            assert_eq!(limiter.state(), &snapshot);
        }
    }

    #[test]
    fn test_block_expiry_clears_attempts_still_inside_window() {
        let (mut limiter, clock) = limiter(2, 60_000, 1_000);

        assert!(limiter.check_and_record_attempt());
        clock.set(100);
        assert!(limiter.check_and_record_attempt());
        clock.set(200);
        assert!(!limiter.check_and_record_attempt());

        // 0 and 100 are still inside the window but the expired block wipes them.
        clock.set(1_200);
        assert!(limiter.check_and_record_attempt());
        assert!(limiter.check_and_record_attempt());
        assert_eq!(limiter.state().attempts(), &[1_200, 1_200]);
    }

    #[test]
    fn test_remaining_time_does_not_clear_expired_block() {
        let (mut limiter, clock) = limiter(1, 60_000, 500);

        assert!(limiter.check_and_record_attempt());
        assert!(!limiter.check_and_record_attempt());

        clock.set(10_000);
        assert_eq!(limiter.remaining_block_time(), 0);
        assert!(limiter.is_blocked());
        assert_eq!(limiter.state().block_end_time(), Some(500));
    }

    #[test]
    fn test_remaining_time_is_non_increasing() {
        let (mut limiter, clock) = limiter(1, 60_000, 3_000);

        assert!(limiter.check_and_record_attempt());
        assert!(!limiter.check_and_record_attempt());

        let mut previous = limiter.remaining_block_time();
        assert_eq!(previous, 3_000);
        for t in (0..=4_000).step_by(250) {
            clock.set(t);
            let remaining = limiter.remaining_block_time();
            assert!(remaining <= previous);
            previous = remaining;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_remaining_time_zero_when_not_blocked() {
        let (mut limiter, _clock) = limiter(3, 60_000, 30_000);
        assert_eq!(limiter.remaining_block_time(), 0);
        assert!(limiter.check_and_record_attempt());
        assert_eq!(limiter.remaining_block_time(), 0);
    }

    #[test]
    fn test_zero_max_attempts_blocks_everything() {
        let (mut limiter, clock) = limiter(0, 60_000, 1_000);

        assert!(!limiter.check_and_record_attempt());
        clock.set(1_000);
        assert!(!limiter.check_and_record_attempt());
        assert!(limiter.state().attempts().is_empty());
    }
}
