pub mod auth;
pub mod config;
pub mod error;
pub mod limiter;
pub mod middleware;
pub mod protocol;
pub mod session;
pub mod utils;

pub use crate::config::{LimiterConfig, ThrottleConfig};
pub use crate::limiter::RateLimiter;
pub use crate::session::Session;
