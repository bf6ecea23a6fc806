//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the engine's collaborators: the order store,
//! the quote feed, the brokerage gateway and the notification transport.

pub mod notifier;
pub mod placement;
pub mod quote;
pub mod store;
