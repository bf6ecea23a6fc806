//! Persistence port for target orders.

use async_trait::async_trait;

use crate::domain::{id::OrderId, order::OrderStatus, order::TargetOrder};
use crate::error::Result;

/// The engine's view of the order working set.
///
/// The engine only reads orders and advances their status; creating and
/// removing orders belongs to the surrounding application.
///
/// # Implementation Notes
///
/// - A write must be visible to every later read in the same process.
/// - Writes to the same order must be serialized.
/// - [`OrderStore::compare_and_set_status`] must be atomic: it is the
///   exactly-once guard for order execution.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Snapshot of all orders, in any status.
    async fn list_orders(&self) -> Result<Vec<TargetOrder>>;

    /// Get an order by ID.
    async fn get_order(&self, id: &OrderId) -> Result<Option<TargetOrder>>;

    /// Advance an order's status.
    ///
    /// Fails with `StoreError::InvalidTransition` if the move is not allowed
    /// by the order lifecycle, or `StoreError::OrderNotFound`.
    async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<()>;

    /// Atomically move an order from `expected` to `status`.
    ///
    /// Returns `Ok(false)` without writing when the current status is not
    /// `expected`, or when the order no longer exists.
    async fn compare_and_set_status(
        &self,
        id: &OrderId,
        expected: OrderStatus,
        status: OrderStatus,
    ) -> Result<bool>;
}
