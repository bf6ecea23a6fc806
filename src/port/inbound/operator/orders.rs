//! Order book use-cases for operator-facing adapters.

use crate::domain::order::TargetOrder;
use crate::error::Result;

/// Read access to order files.
pub trait OrderBookOperator: Send + Sync {
    /// Load every order from a JSON order file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or an order is invalid.
    fn load_orders(&self, path: &str) -> Result<Vec<TargetOrder>>;
}
