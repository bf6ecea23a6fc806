//! Shared helper routines for operator implementations.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::runtime::RunRequest;

pub(super) fn map_app_result(
    result: std::result::Result<Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => {
            error!(error = %error, "Application exited with error");
            Err(error)
        }
        Err(error) => {
            error!(error = %error, "Application task join failed");
            Err(Error::Runtime(error.to_string()))
        }
    }
}

/// Parse the file, resolve its paths, apply CLI overrides, then re-validate.
pub(super) fn load_run_config(request: &RunRequest) -> Result<Config> {
    let mut config = Config::parse_toml(&request.config_toml)?;
    config.resolve_paths(Path::new(&request.config_dir));
    apply_run_overrides(&mut config, request);
    config.validate()?;
    Ok(config)
}

fn apply_run_overrides(config: &mut Config, request: &RunRequest) {
    if let Some(ref log_level) = request.log_level {
        config.logging.level.clone_from(log_level);
    }

    if request.json_logs {
        config.logging.format = "json".to_string();
    }

    if request.dry_run {
        config.engine.dry_run = true;
    }

    if let Some(ref orders_file) = request.orders_file {
        config.orders_file = Some(PathBuf::from(orders_file));
    }

    if let Some(interval_ms) = request.interval_ms {
        config.engine.check_interval_ms = interval_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ConfigError;

    fn request(config_toml: &str) -> RunRequest {
        RunRequest {
            config_toml: config_toml.to_string(),
            config_dir: "/etc/tripwire".to_string(),
            log_level: None,
            json_logs: false,
            dry_run: false,
            orders_file: None,
            interval_ms: None,
        }
    }

    #[test]
    fn overrides_replace_file_values() {
        let request = RunRequest {
            log_level: Some("debug".into()),
            json_logs: true,
            dry_run: true,
            orders_file: Some("other.json".to_string()),
            interval_ms: Some(750),
            ..request("orders_file = \"orders.json\"\n")
        };

        let config = load_run_config(&request).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!(config.engine.dry_run);
        assert_eq!(config.orders_file, Some(PathBuf::from("other.json")));
        assert_eq!(config.engine.check_interval_ms, 750);
    }

    #[test]
    fn file_paths_resolve_against_config_dir() {
        let config = load_run_config(&request("orders_file = \"orders.json\"\n")).unwrap();
        assert_eq!(
            config.orders_file,
            Some(PathBuf::from("/etc/tripwire/orders.json"))
        );
    }

    #[test]
    fn overrides_are_validated() {
        let request = RunRequest {
            interval_ms: Some(0),
            ..request("")
        };
        assert!(matches!(
            load_run_config(&request),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "check_interval_ms",
                ..
            }))
        ));
    }
}
