//! Per-session key/value store
//!
//! Replaces the browser session storage the web client used for caching
//! profile data. Created empty with its session and emptied on logout;
//! dropping the session drops the store.

use std::collections::HashMap;

/// Key under which the logged-in user's display name is cached.
pub const DISPLAY_NAME_KEY: &str = "display_name";

#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
