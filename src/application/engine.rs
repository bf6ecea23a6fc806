//! The trigger engine: one evaluation pass over the current snapshot.
//!
//! A pass reads every order and the latest quotes once, evaluates each
//! `PENDING` order against its instrument's quote and hands triggered orders
//! to the [`Executor`]. Orders are processed sequentially and independently:
//! a failure on one order is logged and the pass moves on.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::executor::{Execution, Executor, Outcome};
use super::message;
use crate::domain::condition::{evaluate, Evaluation};
use crate::domain::order::{OrderStatus, TargetOrder};
use crate::error::{ConfigError, Result};
use crate::port::outbound::{
    notifier::Notifier, placement::OrderPlacer, quote::QuoteSource, store::OrderStore,
};

/// What to do at startup with orders left in `TRIGGERED`.
///
/// Such an order was claimed by a previous run that stopped before recording
/// the outcome. Whether the broker received it is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryPolicy {
    /// Mark the order `FAILED` and ask the recipient to verify.
    #[default]
    Fail,
    /// Leave the order as it is and log a warning.
    Ignore,
}

impl fmt::Display for RecoveryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => f.write_str("fail"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// `PENDING` orders looked at.
    pub evaluated: usize,
    /// Orders skipped because their instrument had no quote.
    pub no_quote: usize,
    /// Orders whose condition held.
    pub triggered: usize,
    pub completed: usize,
    pub failed: usize,
    /// Triggered orders another pass (or a cancel) got to first.
    pub skipped: usize,
    /// Claim or status writes that failed.
    pub errors: usize,
}

impl PassReport {
    fn record(&mut self, execution: &Execution) {
        match execution.outcome {
            Outcome::Completed { .. } => self.completed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
        if !matches!(execution.outcome, Outcome::Skipped) && !execution.status_recorded {
            self.errors += 1;
        }
    }
}

/// Result of [`Engine::recover_stuck_orders`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Orders found in `TRIGGERED`.
    pub found: usize,
    /// Orders moved to `FAILED`.
    pub failed: usize,
    /// Verification notices delivered.
    pub notified: usize,
}

/// Evaluates pending orders against live quotes and executes the ones that
/// trigger.
pub struct Engine {
    store: Arc<dyn OrderStore>,
    quotes: Arc<dyn QuoteSource>,
    executor: Executor,
}

impl Engine {
    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The executor triggered orders go through.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Run one evaluation pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the orders or the quotes cannot be read. Nothing
    /// has been executed in that case. Per-order failures do not end the pass
    /// and are counted in [`PassReport::errors`].
    pub async fn run_pass(&self) -> Result<PassReport> {
        let mut report = PassReport::default();

        let orders = self.store.list_orders().await?;
        let pending = orders.iter().filter(|o| o.is_pending()).count();
        if pending == 0 {
            debug!("No pending orders");
            return Ok(report);
        }

        let quotes = self.quotes.latest_quotes().await?;
        debug!(
            pending,
            quotes = quotes.len(),
            source = self.quotes.source_name(),
            "Evaluating pending orders"
        );

        report.evaluated = pending;
        for order in &orders {
            match evaluate(order, &quotes) {
                Evaluation::NotPending => continue,
                Evaluation::NoQuote => {
                    report.no_quote += 1;
                    debug!(
                        order_id = %order.id(),
                        instrument = %order.instrument_token(),
                        "No quote yet"
                    );
                }
                Evaluation::Waiting { price } => {
                    debug!(
                        order_id = %order.id(),
                        price = %price,
                        target = %order.target_price(),
                        "Condition not met"
                    );
                }
                Evaluation::Triggered { price } => {
                    report.triggered += 1;
                    match self.executor.execute(order, price).await {
                        Ok(execution) => report.record(&execution),
                        Err(e) => {
                            report.errors += 1;
                            error!(order_id = %order.id(), error = %e, "Failed to claim order");
                        }
                    }
                }
            }
        }

        if report.triggered > 0 || report.errors > 0 {
            info!(
                evaluated = report.evaluated,
                triggered = report.triggered,
                completed = report.completed,
                failed = report.failed,
                skipped = report.skipped,
                errors = report.errors,
                "Pass finished"
            );
        }
        Ok(report)
    }

    /// Resolve orders left in `TRIGGERED` by an earlier run.
    ///
    /// Call once at startup, before the scheduler starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the orders cannot be listed. Individual write
    /// failures are logged and leave the order `TRIGGERED`.
    pub async fn recover_stuck_orders(&self, policy: RecoveryPolicy) -> Result<RecoveryReport> {
        let stuck: Vec<TargetOrder> = self
            .store
            .list_orders()
            .await?
            .into_iter()
            .filter(|o| o.status() == OrderStatus::Triggered)
            .collect();

        let mut report = RecoveryReport {
            found: stuck.len(),
            ..RecoveryReport::default()
        };
        if stuck.is_empty() {
            return Ok(report);
        }

        for order in &stuck {
            match policy {
                RecoveryPolicy::Ignore => {
                    warn!(
                        order_id = %order.id(),
                        instrument = %order.instrument_token(),
                        "Order left TRIGGERED by a previous run, leaving as is"
                    );
                }
                RecoveryPolicy::Fail => {
                    if let Err(e) = self
                        .store
                        .update_order_status(order.id(), OrderStatus::Failed)
                        .await
                    {
                        error!(order_id = %order.id(), error = %e, "Failed to recover order");
                        continue;
                    }
                    report.failed += 1;
                    warn!(
                        order_id = %order.id(),
                        instrument = %order.instrument_token(),
                        "Interrupted order marked FAILED, needs verification"
                    );
                    let notice = message::needs_verification(order);
                    if self.executor.deliver(order.id(), &notice).await {
                        report.notified += 1;
                    }
                }
            }
        }

        info!(
            policy = %policy,
            found = report.found,
            failed = report.failed,
            "Recovered stuck orders"
        );
        Ok(report)
    }
}

/// Builder for [`Engine`]. All four collaborators are required.
#[derive(Default)]
pub struct EngineBuilder {
    store: Option<Arc<dyn OrderStore>>,
    quotes: Option<Arc<dyn QuoteSource>>,
    placer: Option<Arc<dyn OrderPlacer>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl EngineBuilder {
    pub fn store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn quotes(mut self, quotes: Arc<dyn QuoteSource>) -> Self {
        self.quotes = Some(quotes);
        self
    }

    pub fn placer(mut self, placer: Arc<dyn OrderPlacer>) -> Self {
        self.placer = Some(placer);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first collaborator
    /// that was not set.
    pub fn build(self) -> std::result::Result<Engine, ConfigError> {
        let store = self
            .store
            .ok_or(ConfigError::MissingField { field: "store" })?;
        let quotes = self
            .quotes
            .ok_or(ConfigError::MissingField { field: "quotes" })?;
        let placer = self
            .placer
            .ok_or(ConfigError::MissingField { field: "placer" })?;
        let notifier = self
            .notifier
            .ok_or(ConfigError::MissingField { field: "notifier" })?;

        Ok(Engine {
            executor: Executor::new(store.clone(), placer, notifier),
            store,
            quotes,
        })
    }
}
