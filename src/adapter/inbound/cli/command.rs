//! Command-line interface definitions.
//!
//! Defines the CLI structure for the trafficwatch application using `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Periodic proxy traffic reporter for Telegram
#[derive(Parser, Debug)]
#[command(name = "trafficwatch")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the trafficwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the reporter until Ctrl+C
    Run(RunArgs),

    /// Run one-shot diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `trafficwatch check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Query the stats API once and print the report.
    Stats(ConfigPathArg),
    /// Send a test message to the configured chat.
    Telegram(ConfigPathArg),
}

/// Arguments for `trafficwatch run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the configuration file (defaults to ./trafficwatch.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log reports instead of sending them; no credentials required.
    #[arg(long)]
    pub dry_run: bool,

    /// Override the report interval in seconds.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Shared `--config` argument.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file (defaults to ./trafficwatch.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
