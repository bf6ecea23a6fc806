//! Notification adapters.
//!
//! Implements the `port::outbound::notifier::Notifier` trait for chat
//! backends. The HTTP e-mail/SMS gateway lives in `adapter::outbound::http`.

#[cfg(feature = "telegram")]
pub mod telegram;
