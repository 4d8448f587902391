//! Configuration handling for the application.
//!
//! Everything comes from environment variables with sensible development
//! defaults, so the binary runs with no setup. `Config::from_env` is the
//! single loading point and the place future validation hooks belong.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// This never fails today because we only do simple string extraction.
    /// In the future, validation (e.g. parse the bind address) can cause it
    /// to return a `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self::new(bind_addr))
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
