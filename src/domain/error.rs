//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs
//! and by status transitions that would break monotonicity.
//!
//! # Examples
//!
//! ```
//! use tripwire::domain::error::DomainError;
//! use tripwire::domain::order::{NewTargetOrder, OrderType, TargetOrder, TransactionType};
//! use rust_decimal_macros::dec;
//!
//! let result = TargetOrder::try_new(NewTargetOrder {
//!     instrument_token: "NSE_EQ|INFY".into(),
//!     symbol: "INFY".into(),
//!     target_price: dec!(1500),
//!     quantity: 0, // invalid
//!     transaction_type: TransactionType::Buy,
//!     order_type: OrderType::Market,
//!     recipient: "trader@example.com".into(),
//! });
//!
//! assert!(matches!(result, Err(DomainError::ZeroQuantity)));
//! ```

use thiserror::Error;

use super::order::OrderStatus;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Quantity must be a positive integer.
    #[error("quantity must be positive")]
    ZeroQuantity,

    /// The trigger threshold must be a positive price.
    #[error("target price must be positive, got {price}")]
    NonPositiveTargetPrice {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Every order must reference an instrument.
    #[error("instrument token cannot be empty")]
    EmptyInstrument,

    /// Every order must name someone to notify.
    #[error("recipient cannot be empty")]
    EmptyRecipient,

    /// Status may only move forward through the lifecycle.
    #[error("illegal status transition {from} -> {to}")]
    IllegalTransition {
        /// Status before the attempted transition.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },
}
