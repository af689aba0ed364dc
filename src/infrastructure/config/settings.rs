//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from an optional TOML file; every field
//! has a default. Credentials are never read from the file, see
//! [`Credentials`](super::credentials::Credentials).
//!
//! # Example
//!
//! ```no_run
//! use trafficwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("trafficwatch.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::credentials::Credentials;
use super::logging::LoggingConfig;
use super::monitor::MonitorAppConfig;
use super::stats::StatsAppConfig;
use super::telegram::TelegramAppConfig;
use crate::adapter::outbound::notifier::telegram::TelegramConfig;
use crate::error::{ConfigError, Result};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trafficwatch.toml";

/// Longest accepted report interval: 30 days.
pub const MAX_INTERVAL_SECS: u64 = 30 * 24 * 60 * 60;

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stats control-plane endpoint and decoder.
    #[serde(default)]
    pub stats: StatsAppConfig,

    /// Telegram Bot API settings.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Reporting loop settings.
    #[serde(default)]
    pub monitor: MonitorAppConfig,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load an explicit path, or [`DEFAULT_CONFIG_FILE`] if it exists, or
    /// fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if whichever
    /// file is used is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for zero durations, an address
    /// without a valid port, or a non-HTTP API base.
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.stats.address)?;

        if self.stats.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stats.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.telegram.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "telegram.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "monitor.interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.monitor.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::InvalidValue {
                field: "monitor.interval_secs",
                reason: format!("must be at most {MAX_INTERVAL_SECS} (30 days)"),
            }
            .into());
        }

        let api_base =
            Url::parse(&self.telegram.api_base).map_err(|e| ConfigError::InvalidValue {
                field: "telegram.api_base",
                reason: e.to_string(),
            })?;
        if !matches!(api_base.scheme(), "http" | "https") || api_base.host_str().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "telegram.api_base",
                reason: "must be an http(s) URL with a host".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.monitor.interval_secs)
    }

    /// Telegram delivery settings for the given credentials.
    #[must_use]
    pub fn telegram_config(&self, credentials: &Credentials) -> TelegramConfig {
        TelegramConfig {
            api_base: self.telegram.api_base.clone(),
            timeout: Duration::from_secs(self.telegram.timeout_secs),
            ..TelegramConfig::new(credentials.bot_token(), credentials.chat_id())
        }
    }
}

fn validate_address(address: &str) -> Result<()> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        field: "stats.address",
        reason: reason.to_string(),
    };

    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| invalid("expected host:port"))?;
    if host.is_empty() {
        return Err(invalid("host is empty").into());
    }
    match port.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid("port must be 1-65535").into()),
        Ok(_) => Ok(()),
    }
}
