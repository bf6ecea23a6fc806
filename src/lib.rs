//! Tripwire - a target-order trigger engine.
//!
//! Users register conditional orders ("buy 10 INFY once it trades at or
//! below 1450"). Tripwire compares live quotes against every pending order
//! on a fixed cadence, places the real order with the broker the moment a
//! condition holds, and notifies the user of the outcome. Each order is
//! executed at most once.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Orders, quotes, status lifecycle and trigger conditions
//! - [`port`] - Traits for the store, quote source, broker and notifiers
//! - [`application`] - Engine, executor and scheduler
//! - [`adapter`] - In-memory store, HTTP gateway, Telegram, CLI
//! - [`infrastructure`] - Configuration, wiring and process lifecycle
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram notifications via `teloxide`
//! - `testkit` - Builders and fakes for tests outside this crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tripwire::adapter::outbound::dry_run::DryRunPlacer;
//! use tripwire::adapter::outbound::memory::MemoryStore;
//! use tripwire::application::engine::Engine;
//! use tripwire::port::outbound::notifier::LogNotifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryStore::new());
//! let engine = Engine::builder()
//!     .store(store.clone())
//!     .quotes(store)
//!     .placer(Arc::new(DryRunPlacer))
//!     .notifier(Arc::new(LogNotifier))
//!     .build()?;
//!
//! let report = engine.run_pass().await?;
//! println!("triggered {} orders", report.triggered);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
