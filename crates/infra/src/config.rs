//! Configuration loading and representation.
//!
//! Read once at startup from `SHOPFRONT_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use shopfront_observability::{LogFormat, ParseLogFormatError};

pub const BIND_ADDR_VAR: &str = "SHOPFRONT_BIND_ADDR";
pub const SEED_PATH_VAR: &str = "SHOPFRONT_SEED_PATH";
pub const LOG_FORMAT_VAR: &str = "SHOPFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidLogFormat { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` serves the embedded demo catalog.
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup; unset or blank variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(BIND_ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = get(SEED_PATH_VAR) {
            config.seed_path = Some(PathBuf::from(value));
        }

        if let Some(value) = get(LOG_FORMAT_VAR) {
            config.log_format = value.parse().map_err(|e: ParseLogFormatError| {
                ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    message: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}
