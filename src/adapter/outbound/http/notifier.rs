//! HTTP notification gateway (e-mail/SMS delivery behind the backend).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::settings::HttpGatewaySettings;
use crate::error::{NotifyError, Result};
use crate::port::outbound::notifier::{Notification, Notifier};

#[derive(Debug, Serialize)]
pub(crate) struct NotificationBody<'a> {
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Notification> for NotificationBody<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            email: &notification.recipient,
            subject: &notification.subject,
            message: &notification.body,
        }
    }
}

/// Notifier that posts to the gateway's notification endpoint.
pub struct HttpNotifier {
    client: Client,
    settings: HttpGatewaySettings,
}

impl HttpNotifier {
    /// Create a notifier for the given gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: HttpGatewaySettings) -> Result<Self> {
        Ok(Self {
            client: settings.client()?,
            settings,
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        if notification.recipient.trim().is_empty() {
            return Err(NotifyError::InvalidRecipient {
                recipient: notification.recipient.clone(),
                reason: "recipient is empty".to_string(),
            }
            .into());
        }
        let url = self.settings.endpoint(&self.settings.notification_path)?;

        let response = self
            .settings
            .authorize(self.client.post(url))
            .json(&NotificationBody::from(notification))
            .send()
            .await
            .map_err(|e| NotifyError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::DeliveryFailed(format!("HTTP {status}")).into());
        }

        debug!(recipient = %notification.recipient, "Notification delivered");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
