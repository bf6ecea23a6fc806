//! Runtime operator implementation.

use async_trait::async_trait;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::error::Result;
use crate::infrastructure::orchestration::runtime::run_with_shutdown;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot, RuntimeOperator};

use super::{entry::Operator, shared};

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = shared::load_run_config(request)?;

        Ok(RunStartupSnapshot {
            gateway_url: config.gateway.base_url,
            orders_file: config.orders_file.map(|path| path.display().to_string()),
            check_interval_ms: config.engine.check_interval_ms,
            recovery: config.engine.recovery.to_string(),
            dry_run: config.engine.dry_run,
        })
    }

    async fn execute_run(&self, request: RunRequest) -> Result<()> {
        let config = shared::load_run_config(&request)?;
        config.init_logging();

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut app_handle =
            tokio::spawn(async move { run_with_shutdown(config, shutdown_rx).await });

        tokio::select! {
            result = &mut app_handle => {
                return shared::map_app_result(result);
            }
            signal = signal::ctrl_c() => {
                match signal {
                    Ok(()) => info!("Shutdown signal received (Ctrl+C)"),
                    Err(e) => error!(error = %e, "Failed to listen for Ctrl+C, shutting down"),
                }
                let _ = shutdown_tx.send(true);
            }
        }

        shared::map_app_result(app_handle.await)
    }
}
