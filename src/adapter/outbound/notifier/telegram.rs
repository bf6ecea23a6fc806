//! Telegram notifications.
//!
//! Sends outcome notifications through a Telegram bot. An order's recipient
//! is used as the chat id when it parses as one; otherwise the message goes
//! to the configured default chat.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info};

use crate::error::{NotifyError, Result};
use crate::port::outbound::notifier::{Notification, Notifier};

/// Configuration for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Chat used when the recipient is not a chat id.
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or invalid.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bot: Bot,
    default_chat: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier enabled");
        Self {
            bot: Bot::new(&config.bot_token),
            default_chat: ChatId(config.chat_id),
        }
    }

    fn chat_for(&self, recipient: &str) -> ChatId {
        recipient
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .unwrap_or(self.default_chat)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let chat = self.chat_for(&notification.recipient);
        let text = format_message(notification);

        self.bot
            .send_message(chat, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| NotifyError::DeliveryFailed(e.to_string()))?;

        debug!(chat_id = chat.0, "Telegram message sent");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}

/// Render a notification as a MarkdownV2 message: bold subject, plain body.
pub fn format_message(notification: &Notification) -> String {
    format!(
        "*{}*\n\n{}",
        escape_markdown(&notification.subject),
        escape_markdown(&notification.body)
    )
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
