//! Runtime lifecycle: seed, recover, schedule, drain.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::outbound::memory::MemoryStore;
use crate::application::scheduler::Scheduler;
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_engine, load_orders};
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::store::OrderStore;

/// Run until `shutdown` flips to `true` or its sender is dropped.
///
/// Loads the order file into a fresh [`MemoryStore`], resolves orders left
/// `TRIGGERED` by an earlier run, then drives the engine on the configured
/// cadence. On shutdown the pass in flight, if any, finishes first.
///
/// # Errors
///
/// Returns an error if wiring fails, the order file cannot be loaded, or
/// stuck-order recovery cannot read the store.
pub async fn run_with_shutdown(config: Config, mut shutdown: watch::Receiver<bool>) -> Result<()> {
    info!(
        dry_run = config.engine.dry_run,
        interval_ms = config.engine.check_interval_ms,
        gateway = %config.gateway.base_url,
        "Starting tripwire"
    );

    let store = Arc::new(MemoryStore::new());
    match &config.orders_file {
        Some(path) => {
            let orders = load_orders(path)?;
            let count = orders.len();
            for order in orders {
                store.insert_order(order)?;
            }
            info!(path = %path.display(), orders = count, "Orders loaded");
        }
        None => warn!("No orders_file configured, starting with an empty order book"),
    }

    let engine = Arc::new(build_engine(&config, store.clone())?);
    engine.recover_stuck_orders(config.engine.recovery).await?;

    let scheduler = Scheduler::new(engine, config.engine.check_interval());
    scheduler.start();

    loop {
        if shutdown.changed().await.is_err() || *shutdown.borrow() {
            break;
        }
    }

    info!("Shutdown requested, waiting for in-flight pass");
    scheduler.shutdown().await;
    log_final_state(store.as_ref()).await;
    Ok(())
}

async fn log_final_state(store: &MemoryStore) {
    let orders = match store.list_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            warn!(error = %e, "Could not read final order state");
            return;
        }
    };
    let mut by_status: BTreeMap<&'static str, usize> = BTreeMap::new();
    for order in &orders {
        *by_status.entry(order.status().as_str()).or_default() += 1;
    }
    info!(orders = orders.len(), statuses = ?by_status, "tripwire stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[tokio::test]
    async fn stops_when_signalled() {
        let mut orders = tempfile::NamedTempFile::new().unwrap();
        write!(orders, "[]").unwrap();

        let mut config = Config::parse_toml("[engine]\ndry_run = true\n").unwrap();
        config.orders_file = Some(orders.path().to_path_buf());
        config.notifications.enabled = false;

        let (tx, rx) = watch::channel(false);
        let handle = tokio::spawn(run_with_shutdown(config, rx));
        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(true).unwrap();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_order_file_is_an_error() {
        let mut config = Config::default();
        config.orders_file = Some("/nonexistent/orders.json".into());

        let (_tx, rx) = watch::channel(false);
        assert!(run_with_shutdown(config, rx).await.is_err());
    }
}
