//! Fixed-cadence driver for the engine.
//!
//! The scheduler owns one background task that runs [`Engine::run_pass`] on
//! every tick. A pass always runs to completion before the next tick is
//! awaited, so passes from one scheduler never overlap; ticks missed while a
//! pass was running are skipped.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use super::engine::Engine;

/// Shortest period a scheduler runs at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

struct Running {
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Runs the engine periodically until stopped.
pub struct Scheduler {
    engine: Arc<Engine>,
    period: Duration,
    running: Mutex<Option<Running>>,
    stopped: Mutex<Option<JoinHandle<()>>>,
}

impl Scheduler {
    /// Create a stopped scheduler. Periods below [`MIN_PERIOD`] are raised
    /// to it.
    pub fn new(engine: Arc<Engine>, period: Duration) -> Self {
        if period < MIN_PERIOD {
            warn!(?period, min = ?MIN_PERIOD, "Scheduler period too short, using minimum");
        }
        let period = period.max(MIN_PERIOD);
        Self {
            engine,
            period,
            running: Mutex::new(None),
            stopped: Mutex::new(None),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start firing passes. The first pass runs one period from now.
    ///
    /// Returns `false` without doing anything if already running. Must be
    /// called from within a tokio runtime.
    pub fn start(&self) -> bool {
        let mut running = self.running.lock();
        if running.as_ref().is_some_and(|r| !r.handle.is_finished()) {
            return false;
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(run_loop(self.engine.clone(), self.period, shutdown_rx));
        *running = Some(Running {
            shutdown_tx,
            handle,
        });
        info!(period = ?self.period, "Scheduler started");
        true
    }

    /// Stop firing passes. A pass already in progress is not cancelled.
    ///
    /// Returns `false` if the scheduler was not running.
    pub fn stop(&self) -> bool {
        let Some(running) = self.running.lock().take() else {
            return false;
        };
        // The receiver is gone only if the task already ended.
        let _ = running.shutdown_tx.send(true);
        *self.stopped.lock() = Some(running.handle);
        info!("Scheduler stopped");
        true
    }

    /// Stop and wait for the background task, including any pass in flight.
    pub async fn shutdown(&self) {
        self.stop();
        let handle = self.stopped.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                error!(error = %e, "Scheduler task ended abnormally");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .as_ref()
            .is_some_and(|r| !r.handle.is_finished())
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(running) = self.running.get_mut().take() {
            let _ = running.shutdown_tx.send(true);
        }
    }
}

async fn run_loop(engine: Arc<Engine>, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!("Scheduler loop exiting");
                    break;
                }
            }

            _ = ticker.tick() => {
                match engine.run_pass().await {
                    Ok(report) => debug!(
                        evaluated = report.evaluated,
                        triggered = report.triggered,
                        "Tick complete"
                    ),
                    Err(e) => error!(error = %e, "Pass failed, retrying next tick"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderStatus, TargetOrder};
    use crate::port::outbound::store::OrderStore;
    use crate::testkit::domain::{buy_limit, snapshot};
    use crate::testkit::fakes::{FlakyStore, RecordingNotifier, RecordingPlacer, ScriptedQuotes};
    use rust_decimal_macros::dec;

    const PERIOD: Duration = Duration::from_secs(1);

    fn scheduler(
        order: &TargetOrder,
        quotes: ScriptedQuotes,
        placer: RecordingPlacer,
    ) -> (Scheduler, Arc<FlakyStore>) {
        scheduler_every(order, quotes, placer, PERIOD)
    }

    fn scheduler_every(
        order: &TargetOrder,
        quotes: ScriptedQuotes,
        placer: RecordingPlacer,
        period: Duration,
    ) -> (Scheduler, Arc<FlakyStore>) {
        let store = Arc::new(FlakyStore::with_orders([order.clone()]));
        let engine = Engine::builder()
            .store(store.clone())
            .quotes(Arc::new(quotes))
            .placer(Arc::new(placer))
            .notifier(Arc::new(RecordingNotifier::new()))
            .build()
            .unwrap();
        (Scheduler::new(Arc::new(engine), period), store)
    }

    fn idle_quotes() -> ScriptedQuotes {
        ScriptedQuotes::new().then(snapshot(&[("INFY", dec!(150))]))
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let order = buy_limit("INFY", dec!(100));
        let (scheduler, _) = scheduler(&order, idle_quotes(), RecordingPlacer::new());

        assert!(!scheduler.is_running());
        assert!(scheduler.start());
        assert!(!scheduler.start());
        assert!(scheduler.is_running());

        scheduler.shutdown().await;
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_raised_to_minimum() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = idle_quotes();
        let (scheduler, _) =
            scheduler_every(&order, quotes.clone(), RecordingPlacer::new(), Duration::ZERO);
        assert_eq!(scheduler.period(), MIN_PERIOD);

        assert!(scheduler.start());
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(scheduler.is_running());
        assert!(quotes.calls() >= 1);
        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = idle_quotes();
        let (scheduler, _) = scheduler(&order, quotes.clone(), RecordingPlacer::new());

        scheduler.start();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(quotes.calls(), 0);

        tokio::time::sleep(Duration::from_millis(2_600)).await;
        assert_eq!(quotes.calls(), 3);

        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_future_passes() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = idle_quotes();
        let (scheduler, _) = scheduler(&order, quotes.clone(), RecordingPlacer::new());

        scheduler.start();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert!(scheduler.stop());
        assert!(!scheduler.stop());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(quotes.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_lets_in_flight_pass_finish() {
        let order = buy_limit("INFY", dec!(100));
        let placer = RecordingPlacer::new().with_delay(Duration::from_secs(30));
        let (scheduler, store) = scheduler(
            &order,
            ScriptedQuotes::new().then(snapshot(&[("INFY", dec!(99))])),
            placer.clone(),
        );

        scheduler.start();
        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(placer.calls(), 1);

        scheduler.stop();
        scheduler.shutdown().await;

        let status = store.get_order(order.id()).await.unwrap().unwrap().status();
        assert_eq!(status, OrderStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn failing_pass_does_not_stop_scheduler() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = ScriptedQuotes::new()
            .then_fail("feed down")
            .then(snapshot(&[("INFY", dec!(99))]));
        let placer = RecordingPlacer::new();
        let (scheduler, store) = scheduler(&order, quotes.clone(), placer.clone());

        scheduler.start();
        tokio::time::sleep(Duration::from_millis(2_100)).await;

        assert_eq!(quotes.calls(), 2);
        assert_eq!(placer.calls(), 1);
        let status = store.get_order(order.id()).await.unwrap().unwrap().status();
        assert_eq!(status, OrderStatus::Completed);
        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn can_restart_after_stop() {
        let order = buy_limit("INFY", dec!(100));
        let quotes = idle_quotes();
        let (scheduler, _) = scheduler(&order, quotes.clone(), RecordingPlacer::new());

        scheduler.start();
        scheduler.shutdown().await;
        assert!(scheduler.start());
        tokio::time::sleep(Duration::from_millis(1_100)).await;
        assert_eq!(quotes.calls(), 1);
        scheduler.shutdown().await;
    }
}
