//! HTTP quote feed.
//!
//! Polls `GET {base}{quotes_path}?instruments=a,b` and accepts either a bare
//! object keyed by instrument token or the same object wrapped in a
//! `{ "data": ... }` envelope:
//!
//! ```json
//! { "NSE_EQ|INE009A01021": { "lastPrice": 1501.25, "timestamp": "2024-05-01T09:15:00Z" } }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::settings::HttpGatewaySettings;
use crate::domain::{id::InstrumentToken, money::Price, quote::Quote, quote::QuoteSnapshot};
use crate::error::{Error, Result};
use crate::port::outbound::quote::QuoteSource;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDto {
    #[serde(alias = "last_price")]
    last_price: Price,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

/// Parse a quotes payload. Quotes without a timestamp are stamped with
/// `received_at`. Entries that cannot be read are logged and left out, so
/// their instrument has no quote this pass.
///
/// # Errors
///
/// Returns an error if the body is not JSON or not an object of quotes.
pub fn parse_quotes(body: &str, received_at: DateTime<Utc>) -> Result<QuoteSnapshot> {
    let mut value: Value = serde_json::from_str(body)?;
    if let Some(data) = value.get_mut("data") {
        value = data.take();
    }

    let Value::Object(entries) = value else {
        return Err(Error::QuoteFeed("expected an object of quotes".into()));
    };

    let mut snapshot = QuoteSnapshot::new();
    for (token, entry) in entries {
        let dto: QuoteDto = match serde_json::from_value(entry) {
            Ok(dto) => dto,
            Err(e) => {
                warn!(instrument = %token, error = %e, "Dropping unreadable quote");
                continue;
            }
        };
        snapshot.insert(Quote {
            instrument_token: InstrumentToken::new(token),
            last_price: dto.last_price,
            timestamp: dto.timestamp.unwrap_or(received_at),
        });
    }
    Ok(snapshot)
}

/// Quote source backed by the gateway's quotes endpoint.
pub struct HttpQuoteFeed {
    client: Client,
    settings: HttpGatewaySettings,
}

impl HttpQuoteFeed {
    /// Create a feed for the given gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: HttpGatewaySettings) -> Result<Self> {
        Ok(Self {
            client: settings.client()?,
            settings,
        })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteFeed {
    async fn latest_quotes(&self) -> Result<QuoteSnapshot> {
        let mut url = self.settings.endpoint(&self.settings.quotes_path)?;
        if !self.settings.instruments.is_empty() {
            let tokens: Vec<&str> = self.settings.instruments.iter().map(|t| t.as_str()).collect();
            url.query_pairs_mut()
                .append_pair("instruments", &tokens.join(","));
        }

        let response = self
            .settings
            .authorize(self.client.get(url))
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        let snapshot = parse_quotes(&body, Utc::now())?;
        debug!(quotes = snapshot.len(), "Fetched quotes");
        Ok(snapshot)
    }

    fn source_name(&self) -> &'static str {
        "http"
    }
}
