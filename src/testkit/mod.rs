//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for target orders and quotes.
//! - [`fakes`] - Scriptable collaborators: `ScriptedQuotes`,
//!   `RecordingPlacer`, `RecordingNotifier`, `FlakyStore`.

pub mod domain;
pub mod fakes;
