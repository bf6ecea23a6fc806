//! Routes parsed commands to their handlers.

use super::command::{CheckCommand, Cli, Commands};
use super::{check, orders, run};
use crate::port::inbound::operator::port::OperatorPort;

/// Dispatch a parsed command line against `operator`.
pub async fn dispatch(cli: Cli, operator: &dyn OperatorPort) -> miette::Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(operator, &args).await,
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(operator, &arg.config),
        Commands::Orders(args) => orders::execute(operator, &args),
    }
}
