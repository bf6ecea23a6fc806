//! Runtime control projection types for operator-facing adapters.
//!
//! Defines request and response types for starting the trigger engine.

use async_trait::async_trait;

use crate::error::Result;

/// Configuration file content plus overrides from CLI flags.
///
/// Overrides take precedence over the configuration file.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Directory relative paths in the configuration resolve against.
    pub config_dir: String,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,

    /// Whether dry-run mode is enabled.
    pub dry_run: bool,

    /// Override for the order file.
    pub orders_file: Option<String>,

    /// Override for the evaluation interval in milliseconds.
    pub interval_ms: Option<u64>,
}

/// Startup information snapshot for display.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub gateway_url: String,
    pub orders_file: Option<String>,
    pub check_interval_ms: u64,
    pub recovery: String,
    pub dry_run: bool,
}

/// Runtime control use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Resolve the effective configuration for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration, with overrides applied, is
    /// invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Run the engine until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if startup fails or the runtime task dies.
    async fn execute_run(&self, request: RunRequest) -> Result<()>;
}
