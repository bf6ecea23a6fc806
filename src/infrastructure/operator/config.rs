//! Configuration operator implementation.

use std::path::Path;

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::{Config, API_TOKEN_ENV};
use crate::port::inbound::operator::config::{
    ConfigCheckReport, ConfigSummary, ConfigurationOperator, OrderFileSummary,
};

use super::entry::Operator;

const TELEGRAM_ENV: [&str; 2] = ["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHAT_ID"];

impl ConfigurationOperator for Operator {
    fn check_config(&self, config_toml: &str, config_dir: &str) -> Result<ConfigCheckReport> {
        let mut config = Config::parse_toml(config_toml)?;
        config.resolve_paths(Path::new(config_dir));

        let mut warnings = Vec::new();

        let order_file = match &config.orders_file {
            Some(path) => {
                let orders = bootstrap::load_orders(path)?;
                let pending = orders.iter().filter(|order| order.is_pending()).count();
                if pending == 0 {
                    warnings.push(format!("{} has no PENDING orders", path.display()));
                }
                Some(OrderFileSummary {
                    path: path.display().to_string(),
                    total: orders.len(),
                    pending,
                })
            }
            None => {
                warnings.push("No orders_file configured".to_string());
                None
            }
        };

        if config.api_token.is_none() && !config.engine.dry_run {
            warnings.push(format!(
                "{API_TOKEN_ENV} not set, orders will be sent without authorization"
            ));
        }

        if config.telegram.enabled {
            for var in TELEGRAM_ENV {
                if std::env::var(var).map_or(true, |value| value.trim().is_empty()) {
                    warnings.push(format!("Telegram enabled but {var} is not set"));
                }
            }
        }

        Ok(ConfigCheckReport {
            summary: summarize(&config),
            order_file,
            warnings,
        })
    }
}

fn summarize(config: &Config) -> ConfigSummary {
    ConfigSummary {
        gateway_url: config.gateway.base_url.clone(),
        check_interval_ms: config.engine.check_interval_ms,
        recovery: config.engine.recovery.to_string(),
        dry_run: config.engine.dry_run,
        instruments: config.gateway.instruments.clone(),
        api_token_loaded: config.api_token.is_some(),
        notifications_enabled: config.notifications.enabled,
        telegram_enabled: config.telegram.enabled,
    }
}
