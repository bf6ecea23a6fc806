//! Connection settings shared by the HTTP adapters.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::domain::id::InstrumentToken;
use crate::error::Result;

/// Connection settings shared by the HTTP adapters.
#[derive(Debug, Clone)]
pub struct HttpGatewaySettings {
    /// Gateway root, e.g. `http://localhost:3000`.
    pub base_url: Url,
    /// Path of the latest-quotes endpoint.
    pub quotes_path: String,
    /// Path of the order-placement endpoint.
    pub place_order_path: String,
    /// Path of the notification endpoint.
    pub notification_path: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Bearer token sent with every request, if set.
    pub api_token: Option<String>,
    /// Instruments to request quotes for. Empty means "whatever the feed has".
    pub instruments: Vec<InstrumentToken>,
}

impl HttpGatewaySettings {
    /// Resolve `path` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Build an HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn client(&self) -> Result<Client> {
        Ok(Client::builder().timeout(self.request_timeout).build()?)
    }

    /// Attach the bearer token, if any.
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
