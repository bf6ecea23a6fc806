//! Command-line interface definitions.
//!
//! Defines the CLI structure for tripwire using `clap`: running the engine,
//! validating configuration and inspecting order files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Target-order trigger engine
#[derive(Parser, Debug)]
#[command(name = "tripwire")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the tripwire CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the trigger engine in the foreground until Ctrl-C
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// List the orders in an order file
    Orders(OrdersArgs),
}

/// Subcommands for `tripwire check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Log triggered orders instead of placing them
    #[arg(long)]
    pub dry_run: bool,

    /// Override the order file from the configuration
    #[arg(short, long)]
    pub orders: Option<PathBuf>,

    /// Override the evaluation interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Arguments for the `orders` subcommand.
#[derive(Parser, Debug)]
pub struct OrdersArgs {
    /// Path to the order file
    #[arg(short, long, default_value = "orders.json")]
    pub file: PathBuf,

    /// Only show orders still waiting for their price
    #[arg(long)]
    pub pending: bool,
}
