//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::dry_run::DryRunPlacer;
use crate::adapter::outbound::http::broker::HttpBrokerGateway;
use crate::adapter::outbound::http::notifier::HttpNotifier;
use crate::adapter::outbound::http::quote::HttpQuoteFeed;
use crate::adapter::outbound::http::settings::HttpGatewaySettings;
use crate::adapter::outbound::memory::MemoryStore;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::application::engine::Engine;
use crate::domain::order::TargetOrder;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::notifier::{LogNotifier, NotifierRegistry};
use crate::port::outbound::placement::OrderPlacer;

/// Build notifier registry from configuration.
///
/// The log notifier is always registered; the gateway and Telegram notifiers
/// are added when enabled.
///
/// # Errors
///
/// Returns an error if the gateway HTTP client cannot be built.
pub fn build_notifier_registry(
    config: &Config,
    settings: &HttpGatewaySettings,
) -> Result<NotifierRegistry> {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.notifications.enabled {
        registry.register(Box::new(HttpNotifier::new(settings.clone())?));
    }

    #[cfg(feature = "telegram")]
    if config.telegram.enabled {
        if let Some(tg_config) = TelegramConfig::from_env() {
            registry.register(Box::new(TelegramNotifier::new(tg_config)));
        } else {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
        }
    }

    info!(notifiers = registry.len(), "Notifiers initialized");
    Ok(registry)
}

/// Choose the order placer: the broker gateway, or a logger in dry-run mode.
///
/// # Errors
///
/// Returns an error if the gateway HTTP client cannot be built.
pub fn build_placer(config: &Config, settings: &HttpGatewaySettings) -> Result<Arc<dyn OrderPlacer>> {
    if config.engine.dry_run {
        warn!("Dry-run mode enabled - orders will be logged, not placed");
        return Ok(Arc::new(DryRunPlacer));
    }
    if settings.api_token.is_none() {
        warn!("BROKER_API_TOKEN not set, placing orders without authorization");
    }
    Ok(Arc::new(HttpBrokerGateway::new(settings.clone())?))
}

/// Wire an [`Engine`] around `store` with the configured adapters.
///
/// # Errors
///
/// Returns an error if the gateway settings are invalid or an HTTP client
/// cannot be built.
pub fn build_engine(config: &Config, store: Arc<MemoryStore>) -> Result<Engine> {
    let settings = config.gateway_settings()?;
    let notifier = build_notifier_registry(config, &settings)?;
    let placer = build_placer(config, &settings)?;
    let quotes = HttpQuoteFeed::new(settings)?;

    Ok(Engine::builder()
        .store(store)
        .quotes(Arc::new(quotes))
        .placer(placer)
        .notifier(Arc::new(notifier))
        .build()?)
}

/// Read a JSON array of target orders.
///
/// # Errors
///
/// Returns an error if the file cannot be read or an order is invalid.
pub fn load_orders(path: &Path) -> Result<Vec<TargetOrder>> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    parse_orders(&content)
}

/// Parse a JSON array of target orders.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or an order fails validation.
pub fn parse_orders(content: &str) -> Result<Vec<TargetOrder>> {
    Ok(serde_json::from_str(content)?)
}
