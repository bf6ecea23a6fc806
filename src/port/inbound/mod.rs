//! Inbound ports: what driving adapters (the CLI) may ask of the system.

pub mod operator;
