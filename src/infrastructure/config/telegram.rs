//! Notification channel configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// `[notifications]` section: the gateway's notification endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Deliver outcome notifications through the gateway. The log notifier
    /// is always on.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

/// `[telegram]` section.
///
/// Credentials come from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
}
