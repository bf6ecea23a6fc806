//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Drives the application: the command-line interface
//! - [`outbound`] - Driven by the application: store, quotes, broker, notifiers

pub mod inbound;
pub mod outbound;
