//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; the broker API token is read from
//! the `BROKER_API_TOKEN` environment variable, never from the file.
//!
//! # Example
//!
//! ```no_run
//! use tripwire::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::engine::EngineConfig;
use super::gateway::GatewayConfig;
use super::logging::LoggingConfig;
use super::telegram::{NotificationsConfig, TelegramAppConfig};
use crate::adapter::outbound::http::settings::HttpGatewaySettings;
use crate::error::{ConfigError, Result};

/// Environment variable holding the gateway bearer token.
pub const API_TOKEN_ENV: &str = "BROKER_API_TOKEN";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// JSON file of target orders loaded at startup.
    #[serde(default)]
    pub orders_file: Option<PathBuf>,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Evaluation cadence, recovery and dry-run.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Quote feed, order placement and notification endpoints.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Gateway notification delivery.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Gateway bearer token, loaded from [`API_TOKEN_ENV`].
    #[serde(skip)]
    pub api_token: Option<String>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.api_token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative `orders_file` paths are resolved against the config file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Resolve a relative `orders_file` against `base_dir`.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if base_dir.as_os_str().is_empty() {
            return;
        }
        let resolved = self
            .orders_file
            .as_ref()
            .filter(|path| path.is_relative())
            .map(|path| base_dir.join(path));
        if resolved.is_some() {
            self.orders_file = resolved;
        }
    }

    /// Validate configuration values.
    ///
    /// Called by [`Config::parse_toml`]; call again after applying overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::MissingField`]
    /// for the first offending setting.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.engine.check_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "check_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.gateway.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.gateway.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        self.gateway.base_url()?;

        for (field, path) in [
            ("quotes_path", &self.gateway.quotes_path),
            ("place_order_path", &self.gateway.place_order_path),
            ("notification_path", &self.gateway.notification_path),
        ] {
            if path.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }
        if self.gateway.instruments.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "instruments",
                reason: "instrument tokens must not be empty".to_string(),
            }
            .into());
        }

        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got {:?}", self.logging.format),
            }
            .into());
        }

        if self.telegram.enabled && !cfg!(feature = "telegram") {
            return Err(ConfigError::InvalidValue {
                field: "telegram.enabled",
                reason: "this build does not include the telegram feature".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the global tracing subscriber from `[logging]`.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Settings for the HTTP adapters.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a URL.
    pub fn gateway_settings(&self) -> Result<HttpGatewaySettings> {
        Ok(self.gateway.to_settings(self.api_token.clone())?)
    }
}
