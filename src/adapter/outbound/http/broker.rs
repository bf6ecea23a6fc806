//! HTTP brokerage gateway.
//!
//! Places real orders through `POST {base}{place_order_path}`. The gateway
//! expects a numeric price on every request, so market orders are sent
//! with `0`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::settings::HttpGatewaySettings;
use crate::domain::{
    id::BrokerOrderId, money::Price, order::OrderType, order::TransactionType,
};
use crate::error::{ExecutionError, Result};
use crate::port::outbound::placement::{OrderPlacer, PlaceOrderRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaceOrderBody<'a> {
    instrument_key: &'a str,
    quantity: u32,
    transaction_type: TransactionType,
    order_type: OrderType,
    #[serde(with = "rust_decimal::serde::float")]
    price: Price,
}

impl<'a> From<&'a PlaceOrderRequest> for PlaceOrderBody<'a> {
    fn from(request: &'a PlaceOrderRequest) -> Self {
        Self {
            instrument_key: request.instrument_token.as_str(),
            quantity: request.quantity,
            transaction_type: request.transaction_type,
            order_type: request.order_type,
            price: request.price.unwrap_or(Price::ZERO),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    data: Option<OrderResponseData>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrderResponseData {
    #[serde(default)]
    order_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a 2xx response body from the placement endpoint.
///
/// An explicit `"status": "error"` is a rejection even with a 2xx code.
/// Any other 2xx body means the broker took the order; a body without a
/// readable order id is reported as `unknown`.
pub(crate) fn parse_order_response(body: &str) -> Result<BrokerOrderId> {
    if body.trim().is_empty() {
        return Ok(BrokerOrderId::new("unknown"));
    }
    let response: OrderResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Order accepted but the response body is unreadable");
            return Ok(BrokerOrderId::new("unknown"));
        }
    };

    if response.status.as_deref() == Some("error") {
        let reason = response
            .message
            .or_else(|| response.data.and_then(|d| d.message))
            .unwrap_or_else(|| "broker returned error status".to_string());
        return Err(ExecutionError::OrderRejected(reason).into());
    }

    let order_id = response.data.and_then(|d| d.order_id);
    Ok(BrokerOrderId::new(order_id.unwrap_or_else(|| "unknown".to_string())))
}

/// Order placer backed by the gateway's placement endpoint.
pub struct HttpBrokerGateway {
    client: Client,
    settings: HttpGatewaySettings,
}

impl HttpBrokerGateway {
    /// Create a gateway client.
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
impl OrderPlacer for HttpBrokerGateway {
    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<BrokerOrderId> {
        let url = self.settings.endpoint(&self.settings.place_order_path)?;
        let body = PlaceOrderBody::from(request);
        debug!(?body, "Submitting order");

        let response = self
            .settings
            .authorize(self.client.post(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ExecutionError::SubmissionFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(ExecutionError::OrderRejected(format!("HTTP {status}: {text}")).into());
        }

        let order_id = parse_order_response(&text)?;
        info!(
            instrument = %request.instrument_token,
            broker_order_id = %order_id,
            "Order placed"
        );
        Ok(order_id)
    }

    fn broker_name(&self) -> &'static str {
        "http"
    }
}
