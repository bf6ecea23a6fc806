//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod orders;
pub mod output;
pub mod run;
