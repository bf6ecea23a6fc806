//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::orders::OrderBookOperator;
use super::runtime::RuntimeOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + OrderBookOperator + RuntimeOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + OrderBookOperator + RuntimeOperator {}
