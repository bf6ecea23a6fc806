//! Notifier port for outcome notifications.
//!
//! This module defines the trait for telling a user what happened to one of
//! their target orders. Delivery is best effort: the engine logs a failed
//! delivery and never lets it change an order's status.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{NotifyError, Result};

/// A message for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// E-mail address, phone number or chat id, as stored on the order.
    pub recipient: String,
    /// Short subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl Notification {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Trait for notification transports.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Return an error when delivery fails; callers decide whether it matters
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification.
    async fn notify(&self, notification: &Notification) -> Result<()>;

    /// Transport name for logging.
    fn name(&self) -> &'static str;
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts each notification to all registered notifiers. Every notifier
/// is attempted even if an earlier one fails; the call fails if any did.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifierRegistry {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let mut failed = Vec::new();
        for notifier in &self.notifiers {
            if let Err(e) = notifier.notify(notification).await {
                warn!(notifier = notifier.name(), error = %e, "Notifier failed");
                failed.push(notifier.name());
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(NotifyError::DeliveryFailed(format!("failed notifiers: {}", failed.join(", "))).into())
        }
    }

    fn name(&self) -> &'static str {
        "registry"
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn notify(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// A logging notifier that records notifications via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        info!(
            recipient = %notification.recipient,
            subject = %notification.subject,
            body = %notification.body,
            "Notification"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
