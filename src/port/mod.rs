//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (brokerages, quote feeds, stores, notification services).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  Engine / Executor /    │
//!     ┌──────────────┤  Scheduler              ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                 │                 │                   │
//!     ▼                 ▼                 ▼                   ▼
//! ┌─────────┐     ┌──────────┐     ┌─────────────┐     ┌───────────┐
//! │  Quote  │     │  Order   │     │   Broker    │     │ Notifier  │
//! │ Source  │     │  Store   │     │  Gateway    │     │  Adapter  │
//! └─────────┘     └──────────┘     └─────────────┘     └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::store::OrderStore`] - Order working set and status writes
//! - [`outbound::quote::QuoteSource`] - Latest quotes per instrument
//! - [`outbound::placement::OrderPlacer`] - Real order submission
//! - [`outbound::notifier::Notifier`] - Outcome notifications
//! - [`inbound::operator::port::OperatorPort`] - Use-cases offered to the CLI

pub mod inbound;
pub mod outbound;
