//! Entry point for the omero-pod CLI.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Respects RUST_LOG; quiet by default.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Up(args) => commands::up::execute(args, &cli.global).await,
        Command::Down => commands::down::execute(&cli.global).await,
        Command::Status(args) => commands::status::execute(args, &cli.global).await,
    }
}
