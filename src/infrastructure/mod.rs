//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, adapter wiring and the process lifecycle.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`operator`] - Operator use-cases behind the CLI
//! - [`orchestration`] - Runtime lifecycle

pub mod bootstrap;
pub mod config;
pub mod operator;
pub mod orchestration;
