//! Handler for the `run` command.

use super::command::RunArgs;
use super::{config, output};
use crate::port::inbound::operator::port::OperatorPort;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot};

/// Execute the run command.
pub async fn execute(operator: &dyn OperatorPort, args: &RunArgs) -> miette::Result<()> {
    if args.interval_ms == Some(0) {
        return Err(miette::miette!(
            help = "use a positive number of milliseconds",
            "--interval-ms must be greater than 0"
        ));
    }

    let config_toml = config::read_config_toml(&args.config)?;
    let request = build_run_request(args, config_toml);

    let startup = operator
        .prepare_run(&request)
        .map_err(|e| config::into_report(e, &args.config, &request.config_toml))?;
    print_startup_config(&startup);

    operator
        .execute_run(request)
        .await
        .map_err(|e| miette::Report::msg(e.to_string()).wrap_err("tripwire stopped with an error"))
}

fn build_run_request(args: &RunArgs, config_toml: String) -> RunRequest {
    RunRequest {
        config_toml,
        config_dir: config::config_dir(&args.config),
        log_level: args.log_level.clone(),
        json_logs: args.json_logs,
        dry_run: args.dry_run,
        orders_file: args.orders.as_deref().map(config::path_arg),
        interval_ms: args.interval_ms,
    }
}

fn print_startup_config(startup: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Gateway", &startup.gateway_url);
    output::field(
        "Orders",
        startup
            .orders_file
            .as_ref()
            .map_or_else(|| output::muted("none"), Clone::clone),
    );
    output::field("Interval", format!("{} ms", startup.check_interval_ms));
    output::field("Recovery", &startup.recovery);

    if startup.dry_run {
        output::warning("Dry-run mode enabled - orders will be logged, not placed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> RunArgs {
        RunArgs {
            config: PathBuf::from("conf/config.toml"),
            log_level: None,
            json_logs: false,
            dry_run: false,
            orders: None,
            interval_ms: None,
        }
    }

    #[test]
    fn request_carries_overrides() {
        let args = RunArgs {
            log_level: Some("debug".into()),
            json_logs: true,
            dry_run: true,
            orders: Some(PathBuf::from("other.json")),
            interval_ms: Some(750),
            ..args()
        };

        let request = build_run_request(&args, "[engine]\n".into());

        assert_eq!(request.config_toml, "[engine]\n");
        assert_eq!(request.config_dir, "conf");
        assert_eq!(request.log_level.as_deref(), Some("debug"));
        assert!(request.json_logs);
        assert!(request.dry_run);
        assert_eq!(request.orders_file.as_deref(), Some("other.json"));
        assert_eq!(request.interval_ms, Some(750));
    }

    #[test]
    fn defaults_leave_file_values_alone() {
        let request = build_run_request(&args(), String::new());
        assert!(request.log_level.is_none());
        assert!(request.orders_file.is_none());
        assert!(request.interval_ms.is_none());
        assert!(!request.dry_run);
    }
}
