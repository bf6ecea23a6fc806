//! Order placement port (brokerage gateway).

use async_trait::async_trait;

use crate::domain::{
    id::BrokerOrderId, id::InstrumentToken, money::Price, order::OrderType, order::TargetOrder,
    order::TransactionType,
};
use crate::error::Result;

/// A real order to submit to the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub instrument_token: InstrumentToken,
    pub quantity: u32,
    pub transaction_type: TransactionType,
    pub order_type: OrderType,
    /// Limit price. `None` for market orders.
    pub price: Option<Price>,
}

impl From<&TargetOrder> for PlaceOrderRequest {
    fn from(order: &TargetOrder) -> Self {
        Self {
            instrument_token: order.instrument_token().clone(),
            quantity: order.quantity(),
            transaction_type: order.transaction_type(),
            order_type: order.order_type(),
            price: order.execution_price(),
        }
    }
}

/// Submits orders to a brokerage.
///
/// The engine calls this at most once per target order over its lifetime.
#[async_trait]
pub trait OrderPlacer: Send + Sync {
    /// Place an order, returning the broker's order ID.
    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<BrokerOrderId>;

    /// Broker name for logging/debugging.
    fn broker_name(&self) -> &'static str;
}
