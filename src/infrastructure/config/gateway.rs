//! Brokerage gateway configuration.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::adapter::outbound::http::settings::HttpGatewaySettings;
use crate::domain::id::InstrumentToken;
use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000".into()
}

fn default_quotes_path() -> String {
    "/quotes".into()
}

fn default_place_order_path() -> String {
    "/place-order".into()
}

fn default_notification_path() -> String {
    "/send-notification".into()
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

/// `[gateway]` section: where quotes come from and orders go to.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_quotes_path")]
    pub quotes_path: String,
    #[serde(default = "default_place_order_path")]
    pub place_order_path: String,
    #[serde(default = "default_notification_path")]
    pub notification_path: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Instruments to request quotes for. Empty asks the feed for everything.
    #[serde(default)]
    pub instruments: Vec<String>,
}

impl GatewayConfig {
    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not a URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })
    }

    /// Build adapter settings, attaching the API token from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_url` is not a URL.
    pub fn to_settings(&self, api_token: Option<String>) -> Result<HttpGatewaySettings, ConfigError> {
        Ok(HttpGatewaySettings {
            base_url: self.base_url()?,
            quotes_path: self.quotes_path.clone(),
            place_order_path: self.place_order_path.clone(),
            notification_path: self.notification_path.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            api_token,
            instruments: self
                .instruments
                .iter()
                .map(|token| InstrumentToken::new(token.trim()))
                .collect(),
        })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            quotes_path: default_quotes_path(),
            place_order_path: default_place_order_path(),
            notification_path: default_notification_path(),
            request_timeout_ms: default_request_timeout_ms(),
            instruments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_resolve_against_base() {
        let settings = GatewayConfig::default().to_settings(None).unwrap();
        assert_eq!(
            settings.endpoint(&settings.quotes_path).unwrap().as_str(),
            "http://localhost:3000/quotes"
        );
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn instruments_are_trimmed() {
        let config = GatewayConfig {
            instruments: vec![" NSE_EQ|INFY ".into()],
            ..GatewayConfig::default()
        };
        let settings = config.to_settings(Some("secret".into())).unwrap();
        assert_eq!(settings.instruments[0].as_str(), "NSE_EQ|INFY");
        assert_eq!(settings.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn rejects_unparsable_base_url() {
        let config = GatewayConfig {
            base_url: "not a url".into(),
            ..GatewayConfig::default()
        };
        assert!(matches!(
            config.base_url(),
            Err(ConfigError::InvalidValue {
                field: "base_url",
                ..
            })
        ));
    }
}
