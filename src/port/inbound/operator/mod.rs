//! Operator-facing inbound ports consumed by CLI adapters.

pub mod config;
pub mod orders;
pub mod port;
pub mod runtime;
