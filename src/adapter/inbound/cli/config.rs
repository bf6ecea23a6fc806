//! Config file access for CLI handlers.

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};

use super::diagnostic::ConfigDiagnostic;
use crate::error::Error;

/// Load config TOML from disk for operator-facing use-cases.
pub fn read_config_toml(path: &Path) -> miette::Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

/// Directory that relative paths inside `path` resolve against.
#[must_use]
pub fn config_dir(path: &Path) -> String {
    path.parent()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default()
}

/// Path as passed to operator use-cases.
#[must_use]
pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Turn an operator error into a report, annotated with the config source
/// when the error is about its content.
pub fn into_report(error: Error, path: &Path, src: &str) -> miette::Report {
    if let Some(diagnostic) = ConfigDiagnostic::from_error(&error, path, src) {
        return diagnostic.into();
    }
    miette::Report::msg(error.to_string()).wrap_err(format!("{} rejected", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn config_dir_of_bare_file_is_empty() {
        assert_eq!(config_dir(Path::new("config.toml")), "");
        assert_eq!(config_dir(Path::new("/etc/tripwire/config.toml")), "/etc/tripwire");
    }

    #[test]
    fn content_errors_keep_source_context() {
        let error = Error::Config(ConfigError::InvalidValue {
            field: "check_interval_ms",
            reason: "must be greater than 0".into(),
        });
        let report = into_report(error, Path::new("config.toml"), "check_interval_ms = 0\n");
        assert!(report.downcast_ref::<ConfigDiagnostic>().is_some());
    }

    #[test]
    fn other_errors_name_the_file() {
        let report = into_report(
            Error::QuoteFeed("down".into()),
            Path::new("config.toml"),
            "",
        );
        assert!(report.to_string().contains("config.toml"));
    }
}
