//! HTTP adapters for the brokerage backend.
//!
//! The quote feed, the order-placement endpoint and the notification
//! endpoint all live behind one gateway base URL. Each adapter owns a
//! `reqwest::Client` built from [`settings::HttpGatewaySettings`].

pub mod broker;
pub mod notifier;
pub mod quote;
pub mod settings;
