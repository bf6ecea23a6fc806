use clap::Parser;
use tripwire::adapter::inbound::cli::command::Cli;
use tripwire::adapter::inbound::cli::dispatch::dispatch;
use tripwire::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    dispatch(cli, &Operator).await
}
