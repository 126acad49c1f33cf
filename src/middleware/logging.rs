//! Logging middleware
//!
//! Structured-ish log lines for login attempts. Passwords never reach here.

use log::{info, warn};

/// Log a received console command
pub fn log_command(session_id: &str, command: &str) {
    info!("Session {} executed: {}", session_id, command);
}

/// Log a login attempt that passed the limiter
pub fn log_attempt(session_id: &str, username: &str, success: bool) {
    if success {
        info!("Session {} logged in as {}", session_id, username);
    } else {
        warn!("Session {} failed login for {}", session_id, username);
    }
}

/// Log a login attempt rejected by the limiter
pub fn log_throttled(session_id: &str, username: &str, remaining_ms: u64) {
    warn!(
        "Session {} throttled login for {}, {} ms remaining",
        session_id, username, remaining_ms
    );
}
