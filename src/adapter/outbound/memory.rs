//! In-memory order store and quote board.
//!
//! Holds the working set of target orders and the latest quote per
//! instrument behind `parking_lot` locks. Every write takes the single
//! write lock, so status changes are serialized and immediately visible
//! to later reads.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{
    id::OrderId, order::OrderStatus, order::TargetOrder, quote::Quote, quote::QuoteSnapshot,
};
use crate::error::{Result, StoreError};
use crate::port::outbound::{quote::QuoteSource, store::OrderStore};

/// In-memory store for orders and quotes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: RwLock<Vec<TargetOrder>>,
    quotes: RwLock<QuoteSnapshot>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `orders`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateOrder`] if two orders share an ID.
    pub fn with_orders(orders: impl IntoIterator<Item = TargetOrder>) -> Result<Self> {
        let store = Self::new();
        for order in orders {
            store.insert_order(order)?;
        }
        Ok(store)
    }

    /// Add a newly created order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateOrder`] if the ID is already present.
    pub fn insert_order(&self, order: TargetOrder) -> Result<()> {
        let mut orders = self.orders.write();
        if orders.iter().any(|o| o.id() == order.id()) {
            return Err(StoreError::DuplicateOrder(order.id().clone()).into());
        }
        orders.push(order);
        Ok(())
    }

    /// Remove an order (external cancel). Returns the removed order.
    pub fn remove_order(&self, id: &OrderId) -> Option<TargetOrder> {
        let mut orders = self.orders.write();
        let index = orders.iter().position(|o| o.id() == id)?;
        Some(orders.remove(index))
    }

    /// Number of orders currently held.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.read().len()
    }

    /// Record a quote, replacing the previous one for its instrument.
    pub fn set_quote(&self, quote: Quote) {
        self.quotes.write().insert(quote);
    }

    /// Replace the whole quote board.
    pub fn replace_quotes(&self, snapshot: QuoteSnapshot) {
        *self.quotes.write() = snapshot;
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn list_orders(&self) -> Result<Vec<TargetOrder>> {
        Ok(self.orders.read().clone())
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<TargetOrder>> {
        Ok(self.orders.read().iter().find(|o| o.id() == id).cloned())
    }

    async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<()> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or_else(|| StoreError::OrderNotFound(id.clone()))?;

        order
            .advance(status)
            .map_err(|_| StoreError::InvalidTransition {
                id: id.clone(),
                from: order.status(),
                to: status,
            })?;
        Ok(())
    }

    async fn compare_and_set_status(
        &self,
        id: &OrderId,
        expected: OrderStatus,
        status: OrderStatus,
    ) -> Result<bool> {
        let mut orders = self.orders.write();
        let Some(order) = orders.iter_mut().find(|o| o.id() == id) else {
            return Ok(false);
        };
        if order.status() != expected {
            return Ok(false);
        }

        order
            .advance(status)
            .map_err(|_| StoreError::InvalidTransition {
                id: id.clone(),
                from: expected,
                to: status,
            })?;
        Ok(true)
    }
}

#[async_trait]
impl QuoteSource for MemoryStore {
    async fn latest_quotes(&self) -> Result<QuoteSnapshot> {
        Ok(self.quotes.read().clone())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
