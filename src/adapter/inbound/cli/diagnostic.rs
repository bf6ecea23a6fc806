//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration errors are rendered with the offending file excerpt, a
//! label on the bad key or token, and a help line.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tripwire::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file.
    #[source_code]
    pub src: NamedSource<String>,

    /// Problematic region, when it can be located.
    #[label("here")]
    pub span: Option<SourceSpan>,

    /// Suggestion for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Build a diagnostic for a configuration error raised while loading
    /// `src` from `path`. Returns `None` for errors that are not about the
    /// file's content.
    pub fn from_error(error: &Error, path: &Path, src: &str) -> Option<Self> {
        let Error::Config(config_error) = error else {
            return None;
        };

        let (message, span, help) = match config_error {
            ConfigError::Parse(e) => (
                e.message().to_string(),
                e.span().map(|r| SourceSpan::from((r.start, r.end - r.start))),
                Some("see config.example.toml for the expected layout".to_string()),
            ),
            ConfigError::InvalidValue { field, reason } => (
                format!("invalid value for {field}: {reason}"),
                locate_key(src, field),
                None,
            ),
            ConfigError::MissingField { field } => (
                format!("missing required field: {field}"),
                locate_key(src, field),
                Some(format!("set `{field}` to a non-empty value")),
            ),
            ConfigError::ReadFile(_) => return None,
        };

        Some(Self {
            message,
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            span,
            help,
        })
    }
}

/// Find `key = ...` in TOML source. Dotted names match on their last segment.
fn locate_key(src: &str, field: &str) -> Option<SourceSpan> {
    let key = field.rsplit('.').next().unwrap_or(field);
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, key.len())));
            }
        }
        offset += line.len();
    }
    None
}
