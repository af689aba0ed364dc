//! CLI module graph.

pub mod check;
pub mod command;
pub mod run;

use crate::error::Result;
use command::{CheckCommand, Cli, Commands};

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns whatever the selected command handler returns.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(&args).await,
        Commands::Check(CheckCommand::Stats(args)) => check::stats::execute(&args).await,
        Commands::Check(CheckCommand::Telegram(args)) => check::telegram::execute(&args).await,
    }
}
