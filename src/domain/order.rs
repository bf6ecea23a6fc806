//! Target orders: conditional instructions executed once a price is reached.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{InstrumentToken, OrderId};
use super::money::Price;

/// Direction of the trade. Also decides which way the price must cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the downstream order is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Executed at the prevailing market price; no price is sent.
    Market,
    /// Executed at the order's target price.
    Limit,
}

impl OrderType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a target order.
///
/// ```text
/// PENDING ──> TRIGGERED ──┬──> COMPLETED
///                         └──> FAILED
/// ```
///
/// Transitions never move backward and never skip `TRIGGERED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Waiting for its price condition.
    #[default]
    Pending,
    /// Claimed for execution; the downstream order may be in flight.
    Triggered,
    /// Downstream order accepted by the broker.
    Completed,
    /// Downstream order rejected or could not be confirmed.
    Failed,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Triggered => "TRIGGERED",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    /// Whether `next` is a legal successor of `self`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Triggered)
                | (Self::Triggered, Self::Completed)
                | (Self::Triggered, Self::Failed)
        )
    }

    /// `COMPLETED` and `FAILED` are never left again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a new target order.
#[derive(Debug, Clone)]
pub struct NewTargetOrder {
    pub instrument_token: InstrumentToken,
    pub symbol: String,
    pub target_price: Price,
    pub quantity: u32,
    pub transaction_type: TransactionType,
    pub order_type: OrderType,
    pub recipient: String,
}

/// A conditional instruction: when the instrument reaches the target price,
/// place the described order and notify the recipient.
///
/// Everything except `status` is fixed at creation. Status changes go
/// through [`TargetOrder::advance`], which enforces the lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderRecord")]
pub struct TargetOrder {
    id: OrderId,
    instrument_token: InstrumentToken,
    symbol: String,
    target_price: Price,
    quantity: u32,
    transaction_type: TransactionType,
    order_type: OrderType,
    status: OrderStatus,
    recipient: String,
    created_at: DateTime<Utc>,
}

impl TargetOrder {
    /// Validate the input and create a `PENDING` order with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if the quantity is zero, the target price is
    /// not positive, or the instrument token or recipient is blank.
    pub fn try_new(new: NewTargetOrder) -> Result<Self, DomainError> {
        Self::from_parts(
            OrderId::new(),
            new,
            OrderStatus::Pending,
            Utc::now(),
        )
    }

    fn from_parts(
        id: OrderId,
        new: NewTargetOrder,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if new.quantity == 0 {
            return Err(DomainError::ZeroQuantity);
        }
        if new.target_price <= Price::ZERO {
            return Err(DomainError::NonPositiveTargetPrice {
                price: new.target_price,
            });
        }
        if new.instrument_token.as_str().trim().is_empty() {
            return Err(DomainError::EmptyInstrument);
        }
        if new.recipient.trim().is_empty() {
            return Err(DomainError::EmptyRecipient);
        }

        Ok(Self {
            id,
            instrument_token: new.instrument_token,
            symbol: new.symbol,
            target_price: new.target_price,
            quantity: new.quantity,
            transaction_type: new.transaction_type,
            order_type: new.order_type,
            status,
            recipient: new.recipient,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    #[must_use]
    pub fn instrument_token(&self) -> &InstrumentToken {
        &self.instrument_token
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn target_price(&self) -> Price {
        self.target_price
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    #[must_use]
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Price handed to the broker: the target price for `LIMIT` orders,
    /// nothing for `MARKET` orders.
    #[must_use]
    pub fn execution_price(&self) -> Option<Price> {
        match self.order_type {
            OrderType::Limit => Some(self.target_price),
            OrderType::Market => None,
        }
    }

    /// Move the order to `next`, returning the previous status.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IllegalTransition`] for any move the lifecycle
    /// does not allow; the order is left unchanged.
    pub fn advance(&mut self, next: OrderStatus) -> Result<OrderStatus, DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        Ok(std::mem::replace(&mut self.status, next))
    }
}

/// Wire form of a [`TargetOrder`], validated on conversion.
///
/// `id`, `status` and `createdAt` may be omitted in order files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRecord {
    #[serde(default)]
    id: OrderId,
    instrument_token: InstrumentToken,
    #[serde(default)]
    symbol: String,
    target_price: Price,
    quantity: u32,
    transaction_type: TransactionType,
    order_type: OrderType,
    #[serde(default)]
    status: OrderStatus,
    #[serde(alias = "email")]
    recipient: String,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRecord> for TargetOrder {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Self::from_parts(
            record.id,
            NewTargetOrder {
                instrument_token: record.instrument_token,
                symbol: record.symbol,
                target_price: record.target_price,
                quantity: record.quantity,
                transaction_type: record.transaction_type,
                order_type: record.order_type,
                recipient: record.recipient,
            },
            record.status,
            record.created_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_order() -> NewTargetOrder {
        NewTargetOrder {
            instrument_token: InstrumentToken::from("NSE_EQ|INE009A01021"),
            symbol: "INFY".into(),
            target_price: dec!(1500),
            quantity: 10,
            transaction_type: TransactionType::Buy,
            order_type: OrderType::Limit,
            recipient: "trader@example.com".into(),
        }
    }

    #[test]
    fn new_orders_start_pending() {
        let order = TargetOrder::try_new(new_order()).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert!(order.is_pending());
        assert_eq!(order.quantity(), 10);
    }

    #[test]
    fn rejects_non_positive_target_price() {
        let result = TargetOrder::try_new(NewTargetOrder {
            target_price: dec!(0),
            ..new_order()
        });
        assert!(matches!(
            result,
            Err(DomainError::NonPositiveTargetPrice { .. })
        ));
    }

    #[test]
    fn rejects_blank_instrument_and_recipient() {
        let blank_instrument = TargetOrder::try_new(NewTargetOrder {
            instrument_token: InstrumentToken::from("  "),
            ..new_order()
        });
        assert_eq!(blank_instrument.unwrap_err(), DomainError::EmptyInstrument);

        let blank_recipient = TargetOrder::try_new(NewTargetOrder {
            recipient: String::new(),
            ..new_order()
        });
        assert_eq!(blank_recipient.unwrap_err(), DomainError::EmptyRecipient);
    }

    #[test]
    fn execution_price_only_for_limit_orders() {
        let limit = TargetOrder::try_new(new_order()).unwrap();
        assert_eq!(limit.execution_price(), Some(dec!(1500)));

        let market = TargetOrder::try_new(NewTargetOrder {
            order_type: OrderType::Market,
            ..new_order()
        })
        .unwrap();
        assert_eq!(market.execution_price(), None);
    }

    #[test]
    fn lifecycle_only_moves_forward() {
        use OrderStatus::*;

        let all = [Pending, Triggered, Completed, Failed];
        let legal = [
            (Pending, Triggered),
            (Triggered, Completed),
            (Triggered, Failed),
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition_to(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
        assert!(Completed.is_terminal());
        assert!(Failed.is_terminal());
        assert!(!Triggered.is_terminal());
    }

    #[test]
    fn advance_rejects_skipping_triggered() {
        let mut order = TargetOrder::try_new(new_order()).unwrap();

        let err = order.advance(OrderStatus::Completed).unwrap_err();
        assert_eq!(
            err,
            DomainError::IllegalTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Completed,
            }
        );
        assert_eq!(order.status(), OrderStatus::Pending);

        assert_eq!(order.advance(OrderStatus::Triggered), Ok(OrderStatus::Pending));
        assert_eq!(order.advance(OrderStatus::Failed), Ok(OrderStatus::Triggered));
        assert!(order.advance(OrderStatus::Pending).is_err());
    }

    #[test]
    fn deserializes_order_file_entries_with_defaults() {
        let json = r#"{
            "instrumentToken": "NSE_EQ|INE002A01018",
            "symbol": "RELIANCE",
            "targetPrice": 2400.5,
            "quantity": 5,
            "transactionType": "SELL",
            "orderType": "MARKET",
            "email": "trader@example.com"
        }"#;

        let order: TargetOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.transaction_type(), TransactionType::Sell);
        assert_eq!(order.target_price(), dec!(2400.5));
        assert_eq!(order.recipient(), "trader@example.com");
    }

    #[test]
    fn deserialization_runs_validation() {
        let json = r#"{
            "instrumentToken": "NSE_EQ|INE002A01018",
            "targetPrice": 100,
            "quantity": 0,
            "transactionType": "BUY",
            "orderType": "LIMIT",
            "recipient": "trader@example.com"
        }"#;

        let err = serde_json::from_str::<TargetOrder>(json).unwrap_err();
        assert!(err.to_string().contains("quantity must be positive"));
    }

    #[test]
    fn serializes_with_camel_case_and_upper_case_enums() {
        let order = TargetOrder::try_new(new_order()).unwrap();
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["transactionType"], "BUY");
        assert_eq!(value["orderType"], "LIMIT");
        assert_eq!(value["status"], "PENDING");
        assert!(value.get("createdAt").is_some());

        let back: TargetOrder = serde_json::from_value(value).unwrap();
        assert_eq!(back, order);
    }
}
