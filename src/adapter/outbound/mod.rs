//! Outbound adapters (driven side).

pub mod dry_run;
pub mod http;
pub mod memory;
pub mod notifier;
