//! Execution of triggered target orders.
//!
//! The executor is the only component that changes order status or talks
//! to the broker and the notifier. Per order it runs, strictly in order:
//!
//! 1. claim: compare-and-swap `PENDING -> TRIGGERED`, before any I/O
//! 2. place the real order
//! 3. record `COMPLETED` or `FAILED`
//! 4. notify the recipient (best effort)
//!
//! Once step 1 succeeds the order is never evaluated again, so the broker is
//! called at most once per order even if later steps fail or the process dies.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::message;
use crate::domain::{
    id::BrokerOrderId, id::OrderId, money::Price, order::OrderStatus, order::TargetOrder,
};
use crate::error::Result;
use crate::port::outbound::{
    notifier::Notification, notifier::Notifier, placement::OrderPlacer,
    placement::PlaceOrderRequest, store::OrderStore,
};

/// What happened to a triggered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The broker accepted the order.
    Completed { broker_order_id: BrokerOrderId },
    /// The broker rejected the order, or it could not be submitted.
    Failed { reason: String },
    /// The order was no longer `PENDING` when we tried to claim it.
    Skipped,
}

/// Report for one execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub order_id: OrderId,
    pub outcome: Outcome,
    /// The terminal status was written to the store.
    pub status_recorded: bool,
    /// The outcome notification was delivered.
    pub notified: bool,
}

impl Execution {
    fn skipped(order_id: OrderId) -> Self {
        Self {
            order_id,
            outcome: Outcome::Skipped,
            status_recorded: false,
            notified: false,
        }
    }
}

/// Turns triggered orders into placed orders, exactly once.
#[derive(Clone)]
pub struct Executor {
    store: Arc<dyn OrderStore>,
    placer: Arc<dyn OrderPlacer>,
    notifier: Arc<dyn Notifier>,
}

impl Executor {
    pub fn new(
        store: Arc<dyn OrderStore>,
        placer: Arc<dyn OrderPlacer>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            placer,
            notifier,
        }
    }

    /// Execute `order`, which triggered at `trigger_price`.
    ///
    /// # Errors
    ///
    /// Fails only if the claim in step 1 cannot be written. Nothing has been
    /// sent to the broker in that case and the order is still `PENDING`.
    /// Everything after the claim is reported through the returned
    /// [`Execution`] instead.
    pub async fn execute(&self, order: &TargetOrder, trigger_price: Price) -> Result<Execution> {
        let id = order.id().clone();

        let claimed = self
            .store
            .compare_and_set_status(&id, OrderStatus::Pending, OrderStatus::Triggered)
            .await?;
        if !claimed {
            info!(order_id = %id, "Order no longer pending, skipping");
            return Ok(Execution::skipped(id));
        }

        info!(
            order_id = %id,
            instrument = %order.instrument_token(),
            side = %order.transaction_type(),
            trigger_price = %trigger_price,
            target_price = %order.target_price(),
            "Target order triggered"
        );

        let request = PlaceOrderRequest::from(order);
        let (outcome, terminal, notification) = match self.placer.place_order(&request).await {
            Ok(broker_order_id) => {
                info!(
                    order_id = %id,
                    broker = self.placer.broker_name(),
                    broker_order_id = %broker_order_id,
                    "Target order executed"
                );
                let notification = message::executed(order, trigger_price, &broker_order_id);
                (
                    Outcome::Completed { broker_order_id },
                    OrderStatus::Completed,
                    notification,
                )
            }
            Err(e) => {
                error!(order_id = %id, error = %e, "Target order execution failed");
                let reason = e.to_string();
                let notification = message::failed(order, trigger_price, &reason);
                (Outcome::Failed { reason }, OrderStatus::Failed, notification)
            }
        };

        let status_recorded = match self.store.update_order_status(&id, terminal).await {
            Ok(()) => true,
            Err(e) => {
                error!(
                    order_id = %id,
                    status = %terminal,
                    error = %e,
                    "Failed to record order status, order stays TRIGGERED"
                );
                false
            }
        };

        let notified = self.deliver(&id, &notification).await;

        Ok(Execution {
            order_id: id,
            outcome,
            status_recorded,
            notified,
        })
    }

    /// Send a notification, logging and swallowing any failure.
    pub(crate) async fn deliver(&self, order_id: &OrderId, notification: &Notification) -> bool {
        match self.notifier.notify(notification).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    order_id = %order_id,
                    notifier = self.notifier.name(),
                    error = %e,
                    "Failed to deliver notification"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{buy_limit, buy_market};
    use crate::testkit::fakes::{FlakyStore, RecordingNotifier, RecordingPlacer};
    use rust_decimal_macros::dec;

    struct Harness {
        store: Arc<FlakyStore>,
        placer: RecordingPlacer,
        notifier: RecordingNotifier,
        executor: Executor,
    }

    fn harness(order: &TargetOrder, placer: RecordingPlacer, notifier: RecordingNotifier) -> Harness {
        let store = Arc::new(FlakyStore::with_orders([order.clone()]));
        let executor = Executor::new(
            store.clone(),
            Arc::new(placer.clone()),
            Arc::new(notifier.clone()),
        );
        Harness {
            store,
            placer,
            notifier,
            executor,
        }
    }

    async fn status_of(store: &FlakyStore, id: &OrderId) -> OrderStatus {
        store.inner().get_order(id).await.unwrap().unwrap().status()
    }

    #[tokio::test]
    async fn successful_placement_completes_and_notifies() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::new());

        let execution = h.executor.execute(&order, dec!(99)).await.unwrap();

        assert_eq!(
            execution.outcome,
            Outcome::Completed {
                broker_order_id: BrokerOrderId::from("broker-1")
            }
        );
        assert!(execution.status_recorded);
        assert!(execution.notified);
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Completed);

        let requests = h.placer.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].price, Some(dec!(100)));
        assert_eq!(requests[0].quantity, 10);

        let notes = h.notifier.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].subject, message::SUBJECT_EXECUTED);
        assert!(notes[0].body.contains("Trigger Price: 99"));
    }

    #[tokio::test]
    async fn market_orders_are_placed_without_price() {
        let order = buy_market("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::new());

        h.executor.execute(&order, dec!(98)).await.unwrap();

        assert_eq!(h.placer.requests()[0].price, None);
    }

    #[tokio::test]
    async fn rejection_marks_failed_and_notifies_once() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(
            &order,
            RecordingPlacer::rejecting("insufficient funds"),
            RecordingNotifier::new(),
        );

        let execution = h.executor.execute(&order, dec!(99)).await.unwrap();

        assert!(matches!(execution.outcome, Outcome::Failed { ref reason } if reason.contains("insufficient funds")));
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Failed);
        let notes = h.notifier.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].subject, message::SUBJECT_FAILED);
    }

    #[tokio::test]
    async fn notification_failure_does_not_change_status() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::failing());

        let execution = h.executor.execute(&order, dec!(100)).await.unwrap();

        assert!(matches!(execution.outcome, Outcome::Completed { .. }));
        assert!(!execution.notified);
        assert_eq!(h.notifier.len(), 1);
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn failure_notification_errors_are_swallowed() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(
            &order,
            RecordingPlacer::rejecting("gateway down"),
            RecordingNotifier::failing(),
        );

        let execution = h.executor.execute(&order, dec!(99)).await.unwrap();

        assert!(matches!(execution.outcome, Outcome::Failed { .. }));
        assert!(!execution.notified);
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Failed);
    }

    #[tokio::test]
    async fn second_execution_of_same_order_is_skipped() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::new());

        h.executor.execute(&order, dec!(99)).await.unwrap();
        let again = h.executor.execute(&order, dec!(98)).await.unwrap();

        assert_eq!(again.outcome, Outcome::Skipped);
        assert_eq!(h.placer.calls(), 1);
        assert_eq!(h.notifier.len(), 1);
    }

    #[tokio::test]
    async fn claim_failure_has_no_side_effects() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::new());
        h.store.fail_claims(true);

        let result = h.executor.execute(&order, dec!(99)).await;

        assert!(result.is_err());
        assert_eq!(h.placer.calls(), 0);
        assert!(h.notifier.is_empty());
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn terminal_write_failure_leaves_order_triggered() {
        let order = buy_limit("INFY", dec!(100));
        let h = harness(&order, RecordingPlacer::new(), RecordingNotifier::new());
        h.store.fail_updates(true);

        let execution = h.executor.execute(&order, dec!(99)).await.unwrap();

        assert!(matches!(execution.outcome, Outcome::Completed { .. }));
        assert!(!execution.status_recorded);
        assert!(execution.notified);
        assert_eq!(status_of(&h.store, order.id()).await, OrderStatus::Triggered);
    }
}
