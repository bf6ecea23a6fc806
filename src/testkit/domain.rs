//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`TargetOrder`], [`Quote`] and
//! [`QuoteSnapshot`] so tests focus on assertions rather than construction
//! boilerplate.

use crate::domain::{
    id::InstrumentToken,
    money::Price,
    order::{NewTargetOrder, OrderType, TargetOrder, TransactionType},
    quote::{Quote, QuoteSnapshot},
};

/// Create a `PENDING` order with the given direction and pricing.
pub fn order(
    instrument: &str,
    transaction_type: TransactionType,
    order_type: OrderType,
    target_price: Price,
) -> TargetOrder {
    TargetOrder::try_new(NewTargetOrder {
        instrument_token: InstrumentToken::from(instrument),
        symbol: instrument.to_string(),
        target_price,
        quantity: 10,
        transaction_type,
        order_type,
        recipient: "trader@example.com".to_string(),
    })
    .expect("valid test order")
}

pub fn buy_limit(instrument: &str, target_price: Price) -> TargetOrder {
    order(instrument, TransactionType::Buy, OrderType::Limit, target_price)
}

pub fn buy_market(instrument: &str, target_price: Price) -> TargetOrder {
    order(instrument, TransactionType::Buy, OrderType::Market, target_price)
}

pub fn sell_limit(instrument: &str, target_price: Price) -> TargetOrder {
    order(instrument, TransactionType::Sell, OrderType::Limit, target_price)
}

pub fn sell_market(instrument: &str, target_price: Price) -> TargetOrder {
    order(instrument, TransactionType::Sell, OrderType::Market, target_price)
}

/// Create a [`Quote`] stamped now.
pub fn quote(instrument: &str, last_price: Price) -> Quote {
    Quote::new(instrument, last_price)
}

/// Create a snapshot from `(instrument, price)` pairs.
pub fn snapshot(prices: &[(&str, Price)]) -> QuoteSnapshot {
    prices
        .iter()
        .map(|(instrument, price)| quote(instrument, *price))
        .collect()
}
