//! Clap derive structures for the `dishy` CLI.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dishy -- query a Starlink dish from the command line
#[derive(Debug, Parser)]
#[command(
    name = "dishy",
    version,
    about = "Query a Starlink dish from the command line",
    long_about = "Talks to the dish's gRPC endpoint on the local network.\n\n\
        The dish publishes no .proto files; its schema is discovered at\n\
        runtime over server reflection, so this tool works across firmware\n\
        versions without regeneration.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dish gRPC endpoint as host:port (defaults to the dish's fixed
    /// LAN address)
    #[arg(long, short = 'a', env = "DISHY_ADDRESS", global = true)]
    pub address: Option<String>,

    /// Connect and request timeout in seconds
    #[arg(long, env = "DISHY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DISHY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current dish status
    #[command(alias = "st")]
    Status,

    /// Show device identity (id, hardware, firmware)
    Info,

    /// List active alerts
    Alerts,

    /// Poll status continuously
    Watch(WatchArgs),
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between polls
    #[arg(long, short = 'n', default_value = "5")]
    pub interval: u64,
}
