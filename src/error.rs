use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::id::OrderId;
use crate::domain::order::OrderStatus;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Order placement errors.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("order rejected: {0}")]
    OrderRejected(String),

    #[error("failed to submit order: {0}")]
    SubmissionFailed(String),
}

/// Notification delivery errors.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("invalid recipient '{recipient}': {reason}")]
    InvalidRecipient { recipient: String, reason: String },
}

/// Order store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("order {id}: illegal status transition {from} -> {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("order {0} already exists")]
    DuplicateOrder(OrderId),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("quote feed error: {0}")]
    QuoteFeed(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
