//! Attempt limiting
//!
//! Sliding-window attempt counter with a temporary block once the
//! threshold is exceeded.

pub mod clock;
pub mod rate_limiter;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use rate_limiter::RateLimiter;
pub use state::RateLimiterState;
