//! Infrastructure configuration modules.

pub mod engine;
pub mod gateway;
pub mod logging;
pub mod settings;
pub mod telegram;
