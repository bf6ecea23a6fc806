//! Dry-run order placer.
//!
//! Stands in for the brokerage when `engine.dry_run` is set: every order is
//! logged and acknowledged with a synthetic id, nothing leaves the process.

use async_trait::async_trait;
use tracing::info;

use crate::domain::id::BrokerOrderId;
use crate::error::Result;
use crate::port::outbound::placement::{OrderPlacer, PlaceOrderRequest};

pub struct DryRunPlacer;

#[async_trait]
impl OrderPlacer for DryRunPlacer {
    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<BrokerOrderId> {
        info!(
            instrument = %request.instrument_token,
            side = %request.transaction_type,
            order_type = %request.order_type,
            quantity = request.quantity,
            price = ?request.price,
            "Dry run: order not sent"
        );
        Ok(BrokerOrderId::new(format!("dry-run-{}", uuid::Uuid::new_v4())))
    }

    fn broker_name(&self) -> &'static str {
        "dry-run"
    }
}
