//! Configuration management for the login console
//!
//! Values come from an optional `config.toml` with environment overrides
//! (`LOGIN_THROTTLE__SECTION__KEY`). Every field has a default so the console
//! also starts with no file at all.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::auth::PasswordPolicy;

const CONFIG_PATHS: [&str; 2] = ["login-throttle/config", "config"];
const ENV_PREFIX: &str = "LOGIN_THROTTLE";

/// Complete console configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ThrottleConfig {
    /// Limits applied to LOGIN submissions
    #[serde(default)]
    pub login_limiter: LimiterConfig,

    /// Rules used by CHECKPW
    #[serde(default)]
    pub password_policy: PasswordPolicy,

    /// Stand-in credential table, `username = "password"`
    #[serde(default)]
    pub credentials: HashMap<String, String>,

    /// Optional `username = "Display Name"` table
    #[serde(default)]
    pub display_names: HashMap<String, String>,

    /// Longest accepted console line, in bytes
    #[serde(default = "default_max_command_length")]
    pub max_command_length: usize,
}

/// Attempt limits for one protected action. Fixed once a limiter is built.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LimiterConfig {
    /// Attempts allowed per window
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Rolling window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// How long a triggered block lasts, in milliseconds
    #[serde(default = "default_block_duration_ms")]
    pub block_duration_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_block_duration_ms() -> u64 {
    30_000
}

fn default_max_command_length() -> usize {
    512
}

/// `LOGIN_THROTTLE__LOGIN_LIMITER__MAX_ATTEMPTS=3` style overrides
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_ms: default_window_ms(),
            block_duration_ms: default_block_duration_ms(),
        }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            login_limiter: LimiterConfig::default(),
            password_policy: PasswordPolicy::default(),
            credentials: HashMap::new(),
            display_names: HashMap::new(),
            max_command_length: default_max_command_length(),
        }
    }
}

impl ThrottleConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        for path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        Self::from_builder(builder.add_source(environment()))
    }

    /// Build, deserialize and validate whatever sources `builder` holds
    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: ThrottleConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.login_limiter.validate()?;

        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.password_policy.min_length == 0 {
            return Err(ConfigError::Message(
                "password_policy.min_length must be greater than 0".into(),
            ));
        }

        if self.credentials.is_empty() {
            warn!("No credentials configured, every LOGIN will be rejected");
        }

        Ok(())
    }
}

impl LimiterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_ms == 0 {
            return Err(ConfigError::Message(
                "window_ms must be greater than 0".into(),
            ));
        }

        if self.block_duration_ms == 0 {
            return Err(ConfigError::Message(
                "block_duration_ms must be greater than 0".into(),
            ));
        }

        if self.max_attempts == 0 {
            warn!("max_attempts is 0, every attempt will be blocked");
        }

        Ok(())
    }

    /// Get the window as Duration
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Get the block duration as Duration
    pub fn block_duration(&self) -> Duration {
        Duration::from_millis(self.block_duration_ms)
    }
}
