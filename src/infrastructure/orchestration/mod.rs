//! Runtime orchestration.

pub mod runtime;
