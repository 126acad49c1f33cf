//! Module `session::state`
//!
//! Defines the `Session` struct holding per-caller login state.

use log::debug;
use std::collections::HashMap;

use super::results::{LoginOutcome, LoginStatus};
use super::store::{DISPLAY_NAME_KEY, SessionStore};
use crate::auth::{CredentialVerifier, generate_token};
use crate::config::LimiterConfig;
use crate::error::AuthError;
use crate::limiter::{Clock, RateLimiter, SystemClock};
use crate::middleware::logging::{log_attempt, log_throttled};

const SESSION_ID_LENGTH: usize = 8;

/// State of one console session.
///
/// Every LOGIN submission goes through `login_limiter` before credentials
/// are looked at, so a throttled caller learns nothing about the password.
pub struct Session<C: Clock = SystemClock> {
    id: String,
    username: Option<String>,
    login_limiter: RateLimiter<C>,
    display_names: HashMap<String, String>,
    store: SessionStore,
}

impl Session<SystemClock> {
    pub fn new(limits: LimiterConfig, display_names: HashMap<String, String>) -> Self {
        Self::with_clock(limits, display_names, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(
        limits: LimiterConfig,
        display_names: HashMap<String, String>,
        clock: C,
    ) -> Self {
        let id = generate_token(SESSION_ID_LENGTH);
        debug!("Session {} opened", id);
        Self {
            id,
            username: None,
            login_limiter: RateLimiter::with_clock(limits, clock),
            display_names,
            store: SessionStore::new(),
        }
    }

    /// Submits a username/password pair.
    ///
    /// Counts as an attempt whether or not the credentials match.
    pub fn attempt_login(
        &mut self,
        username: &str,
        password: &str,
        verifier: &dyn CredentialVerifier,
    ) -> LoginOutcome {
        if !self.login_limiter.check_and_record_attempt() {
            let remaining_ms = self.login_limiter.remaining_block_time();
            log_throttled(&self.id, username, remaining_ms);
            return LoginOutcome::Throttled { remaining_ms };
        }

        match verifier.verify(username, password) {
            Ok(()) => {
                log_attempt(&self.id, username, true);
                let display_name = self
                    .display_names
                    .get(username)
                    .cloned()
                    .unwrap_or_else(|| username.to_string());

                self.store.clear();
                self.store.set(DISPLAY_NAME_KEY, display_name.clone());
                self.username = Some(username.to_string());

                LoginOutcome::LoggedIn {
                    username: username.to_string(),
                    display_name,
                }
            }
            Err(e) => {
                log_attempt(&self.id, username, false);
                LoginOutcome::Rejected(e)
            }
        }
    }

    /// Logs out and empties the session store. The limiter is untouched.
    pub fn logout(&mut self) -> Result<String, AuthError> {
        let username = self.username.take().ok_or(AuthError::NotLoggedIn)?;
        self.store.clear();
        Ok(username)
    }

    /// Username and cached display name of the logged-in user.
    pub fn whoami(&self) -> Result<(&str, &str), AuthError> {
        let username = self.username.as_deref().ok_or(AuthError::NotLoggedIn)?;
        let display_name = self.store.get(DISPLAY_NAME_KEY).unwrap_or(username);
        Ok((username, display_name))
    }

    pub fn login_status(&self) -> LoginStatus {
        LoginStatus {
            username: self.username.clone(),
            recorded_attempts: self.login_limiter.state().attempts().len(),
            max_attempts: self.login_limiter.config().max_attempts,
            remaining_block_ms: self.login_limiter.remaining_block_time(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

impl<C: Clock> Drop for Session<C> {
    fn drop(&mut self) {
        self.store.clear();
        debug!("Session {} closed", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticCredentials;
    use crate::limiter::ManualClock;

    fn credentials() -> StaticCredentials {
        let mut users = HashMap::new();
        users.insert("alice".to_string(), "Alice#2024".to_string());
        users.insert("bob".to_string(), "Bob#2024".to_string());
        StaticCredentials::new(users)
    }

    fn session(max_attempts: u32) -> (Session<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let limits = LimiterConfig {
            max_attempts,
            window_ms: 60_000,
            block_duration_ms: 30_000,
        };
        let mut names = HashMap::new();
        names.insert("alice".to_string(), "Alice Liddell".to_string());
        (Session::with_clock(limits, names, clock.clone()), clock)
    }

    #[test]
    fn test_login_caches_display_name() {
        let (mut session, _clock) = session(3);
        let outcome = session.attempt_login("alice", "Alice#2024", &credentials());

        assert_eq!(
            outcome,
            LoginOutcome::LoggedIn {
                username: "alice".into(),
                display_name: "Alice Liddell".into()
            }
        );
        assert_eq!(session.whoami(), Ok(("alice", "Alice Liddell")));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let (mut session, _clock) = session(3);
        session.attempt_login("bob", "Bob#2024", &credentials());
        assert_eq!(session.whoami(), Ok(("bob", "bob")));
    }

    #[test]
    fn test_logout_clears_store() {
        let (mut session, _clock) = session(3);
        session.attempt_login("alice", "Alice#2024", &credentials());

        assert_eq!(session.logout(), Ok("alice".to_string()));
        assert!(session.store().is_empty());
        assert_eq!(session.whoami(), Err(AuthError::NotLoggedIn));
        assert_eq!(session.logout(), Err(AuthError::NotLoggedIn));
    }

    #[test]
    fn test_throttled_attempt_skips_verification() {
        let (mut session, clock) = session(2);
        let creds = credentials();

        for _ in 0..2 {
            assert!(matches!(
                session.attempt_login("alice", "wrong", &creds),
                LoginOutcome::Rejected(AuthError::InvalidCredentials(_))
            ));
        }

        clock.set(1_000);
        assert_eq!(
            session.attempt_login("alice", "Alice#2024", &creds),
            LoginOutcome::Throttled { remaining_ms: 30_000 }
        );
        assert!(!session.is_logged_in());

        clock.set(31_000);
        assert!(matches!(
            session.attempt_login("alice", "Alice#2024", &creds),
            LoginOutcome::LoggedIn { .. }
        ));
    }

    #[test]
    fn test_successful_logins_count_as_attempts() {
        let (mut session, _clock) = session(1);
        let creds = credentials();

        assert!(matches!(
            session.attempt_login("alice", "Alice#2024", &creds),
            LoginOutcome::LoggedIn { .. }
        ));
        assert!(matches!(
            session.attempt_login("alice", "Alice#2024", &creds),
            LoginOutcome::Throttled { .. }
        ));
    }

    #[test]
    fn test_login_status() {
        let (mut session, _clock) = session(3);
        session.attempt_login("alice", "nope", &credentials());

        let status = session.login_status();
        assert_eq!(status.username, None);
        assert_eq!(status.recorded_attempts, 1);
        assert_eq!(status.max_attempts, 3);
        assert_eq!(status.remaining_block_ms, 0);
    }
}
