//! dishy -- command-line status client for the Starlink user terminal.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use dishy_core::AsyncDish;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "dishy=info,dishy_core=info",
        2 => "dishy=debug,dishy_core=debug,dishy_api=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let dish_config = config::resolve(&cli.global)?;
    let mut dish = AsyncDish::new(dish_config);

    // One connect per invocation; commands refresh as they need to.
    dish.connect_without_refresh().await?;

    match cli.command {
        Command::Status => commands::status::handle(&mut dish, &cli.global).await,
        Command::Info => commands::info::handle(&mut dish, &cli.global).await,
        Command::Alerts => commands::alerts::handle(&mut dish, &cli.global).await,
        Command::Watch(args) => commands::watch::handle(&mut dish, &args, &cli.global).await,
    }
}
