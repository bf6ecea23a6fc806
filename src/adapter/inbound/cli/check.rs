//! Configuration validation command.

use std::path::Path;

use super::{config, output};
use crate::port::inbound::operator::config::ConfigCheckReport;
use crate::port::inbound::operator::port::OperatorPort;

/// Validate configuration file without starting the engine.
pub fn execute_config(operator: &dyn OperatorPort, config_path: &Path) -> miette::Result<()> {
    let config_toml = config::read_config_toml(config_path)?;
    let report = operator
        .check_config(&config_toml, &config::config_dir(config_path))
        .map_err(|e| config::into_report(e, config_path, &config_toml))?;

    output::section("Configuration Check");
    output::field("Config", config_path.display());
    output::success("Configuration file is valid");
    print_report(&report);
    output::success("Configuration check complete");
    Ok(())
}

fn print_report(report: &ConfigCheckReport) {
    let summary = &report.summary;

    output::section("Summary");
    output::field("Gateway", &summary.gateway_url);
    output::field("Interval", format!("{} ms", summary.check_interval_ms));
    output::field("Recovery", &summary.recovery);
    output::field("Dry run", summary.dry_run);
    if summary.instruments.is_empty() {
        output::field("Instruments", output::muted("all (feed default)"));
    } else {
        output::field("Instruments", summary.instruments.join(", "));
    }
    output::field(
        "API token",
        if summary.api_token_loaded { "loaded" } else { "not set" },
    );
    output::field(
        "Notifications",
        if summary.notifications_enabled {
            "gateway + log"
        } else {
            "log only"
        },
    );
    output::field(
        "Telegram",
        if summary.telegram_enabled { "enabled" } else { "disabled" },
    );

    if let Some(orders) = &report.order_file {
        output::success(&format!(
            "Order file {} ({} orders, {} pending)",
            orders.path,
            orders.total,
            orders.pending
        ));
        output::hint(&format!(
            "tripwire orders -f {} lists them",
            orders.path
        ));
    }

    for warning in &report.warnings {
        output::warning(warning);
    }
}
