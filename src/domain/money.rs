//! Monetary types for price representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal so trigger comparisons are exact.
pub type Price = Decimal;
