//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Resolved settings shown by `check config`.
#[derive(Debug, Clone)]
pub struct ConfigSummary {
    pub gateway_url: String,
    pub check_interval_ms: u64,
    pub recovery: String,
    pub dry_run: bool,
    /// Empty means the feed's default instrument set.
    pub instruments: Vec<String>,
    pub api_token_loaded: bool,
    pub notifications_enabled: bool,
    pub telegram_enabled: bool,
}

/// Order file statistics for a configured `orders_file`.
#[derive(Debug, Clone)]
pub struct OrderFileSummary {
    pub path: String,
    pub total: usize,
    pub pending: usize,
}

/// Output of `check config`.
#[derive(Debug, Clone)]
pub struct ConfigCheckReport {
    pub summary: ConfigSummary,
    /// `None` when no `orders_file` is configured.
    pub order_file: Option<OrderFileSummary>,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Validate `config_toml` and the order file it names.
    ///
    /// Relative paths in the configuration resolve against `config_dir`;
    /// an empty string means the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the configured
    /// order file cannot be read or parsed.
    fn check_config(&self, config_toml: &str, config_dir: &str) -> Result<ConfigCheckReport>;
}
