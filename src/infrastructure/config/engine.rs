//! Trigger engine configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::engine::RecoveryPolicy;

const fn default_check_interval_ms() -> u64 {
    5_000
}

/// `[engine]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Time between evaluation passes (default: 5000).
    #[serde(default = "default_check_interval_ms")]
    pub check_interval_ms: u64,
    /// Handling of orders left `TRIGGERED` by a previous run.
    #[serde(default)]
    pub recovery: RecoveryPolicy,
    /// Log placements instead of sending them to the broker.
    #[serde(default)]
    pub dry_run: bool,
}

impl EngineConfig {
    #[must_use]
    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: default_check_interval_ms(),
            recovery: RecoveryPolicy::default(),
            dry_run: false,
        }
    }
}
