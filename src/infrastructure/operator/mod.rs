//! Operator implementations for inbound adapters.

pub mod config;
pub mod entry;
pub mod orders;
pub mod runtime;

mod shared;
