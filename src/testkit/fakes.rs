//! Scriptable collaborators for engine tests.
//!
//! - [`ScriptedQuotes`] - Returns a queued sequence of snapshots (or
//!   failures), one per call, repeating the last snapshot when exhausted.
//! - [`RecordingPlacer`] - Records every placement request; succeeds or
//!   rejects as configured.
//! - [`RecordingNotifier`] - Records every notification; can be told to fail.
//! - [`FlakyStore`] - Wraps a [`MemoryStore`] and injects read/write failures.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::adapter::outbound::memory::MemoryStore;
use crate::domain::{
    id::BrokerOrderId, id::OrderId, order::OrderStatus, order::TargetOrder, quote::QuoteSnapshot,
};
use crate::error::{Error, ExecutionError, NotifyError, Result, StoreError};
use crate::port::outbound::{
    notifier::Notification, notifier::Notifier, placement::OrderPlacer,
    placement::PlaceOrderRequest, quote::QuoteSource, store::OrderStore,
};

// ---------------------------------------------------------------------------
// ScriptedQuotes
// ---------------------------------------------------------------------------

enum QuoteStep {
    Snapshot(QuoteSnapshot),
    Fail(String),
}

/// A quote source that plays back a script, one step per call.
#[derive(Clone, Default)]
pub struct ScriptedQuotes {
    steps: Arc<Mutex<VecDeque<QuoteStep>>>,
    last: Arc<Mutex<QuoteSnapshot>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedQuotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a snapshot.
    pub fn then(self, snapshot: QuoteSnapshot) -> Self {
        self.steps.lock().push_back(QuoteStep::Snapshot(snapshot));
        self
    }

    /// Queue a failing call.
    pub fn then_fail(self, reason: &str) -> Self {
        self.steps.lock().push_back(QuoteStep::Fail(reason.to_string()));
        self
    }

    /// Number of `latest_quotes` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for ScriptedQuotes {
    async fn latest_quotes(&self) -> Result<QuoteSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front();
        match step {
            Some(QuoteStep::Snapshot(snapshot)) => {
                *self.last.lock() = snapshot.clone();
                Ok(snapshot)
            }
            Some(QuoteStep::Fail(reason)) => Err(Error::QuoteFeed(reason)),
            None => Ok(self.last.lock().clone()),
        }
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

// ---------------------------------------------------------------------------
// RecordingPlacer
// ---------------------------------------------------------------------------

/// An order placer that records requests.
#[derive(Clone, Default)]
pub struct RecordingPlacer {
    requests: Arc<Mutex<Vec<PlaceOrderRequest>>>,
    reject_with: Arc<Mutex<Option<String>>>,
    delay: Option<Duration>,
}

impl RecordingPlacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A placer whose every call is rejected with `reason`.
    pub fn rejecting(reason: &str) -> Self {
        let placer = Self::new();
        placer.reject(reason);
        placer
    }

    /// Sleep for `delay` inside every placement.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Reject all following calls.
    pub fn reject(&self, reason: &str) {
        *self.reject_with.lock() = Some(reason.to_string());
    }

    pub fn requests(&self) -> Vec<PlaceOrderRequest> {
        self.requests.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl OrderPlacer for RecordingPlacer {
    async fn place_order(&self, request: &PlaceOrderRequest) -> Result<BrokerOrderId> {
        let n = {
            let mut requests = self.requests.lock();
            requests.push(request.clone());
            requests.len()
        };
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = self.reject_with.lock().clone() {
            return Err(ExecutionError::OrderRejected(reason).into());
        }
        Ok(BrokerOrderId::new(format!("broker-{n}")))
    }

    fn broker_name(&self) -> &'static str {
        "recording"
    }
}

// ---------------------------------------------------------------------------
// RecordingNotifier
// ---------------------------------------------------------------------------

/// Thread-safe notification collector.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records each attempt and then reports failure.
    pub fn failing() -> Self {
        let notifier = Self::new();
        notifier.fail.store(true, Ordering::SeqCst);
        notifier
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        self.notifications.lock().push(notification.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(NotifyError::DeliveryFailed("simulated outage".into()).into());
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

// ---------------------------------------------------------------------------
// FlakyStore
// ---------------------------------------------------------------------------

/// A [`MemoryStore`] wrapper with switchable failures.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_updates: AtomicBool,
    fail_claims: AtomicBool,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Wrap a fresh [`MemoryStore`] seeded with `orders`.
    ///
    /// # Panics
    ///
    /// Panics if two orders share an id.
    pub fn with_orders(orders: impl IntoIterator<Item = TargetOrder>) -> Self {
        match MemoryStore::with_orders(orders) {
            Ok(inner) => Self::new(inner),
            Err(e) => panic!("invalid test orders: {e}"),
        }
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    /// Make `list_orders`/`get_order` fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make `update_order_status` fail.
    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Make `compare_and_set_status` fail.
    pub fn fail_claims(&self, fail: bool) {
        self.fail_claims.store(fail, Ordering::SeqCst);
    }

    fn unavailable() -> Error {
        StoreError::Unavailable("injected failure".into()).into()
    }
}

#[async_trait]
impl OrderStore for FlakyStore {
    async fn list_orders(&self) -> Result<Vec<TargetOrder>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.list_orders().await
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<TargetOrder>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.get_order(id).await
    }

    async fn update_order_status(&self, id: &OrderId, status: OrderStatus) -> Result<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.update_order_status(id, status).await
    }

    async fn compare_and_set_status(
        &self,
        id: &OrderId,
        expected: OrderStatus,
        status: OrderStatus,
    ) -> Result<bool> {
        if self.fail_claims.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        self.inner.compare_and_set_status(id, expected, status).await
    }
}
