//! Handler for the `run` command.

use tokio::signal;
use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::supervisor;

/// Execute the run command.
///
/// Returns immediately when credentials are missing (monitoring disabled);
/// otherwise runs until Ctrl+C.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = load_run_config(args)?;
    config.init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "trafficwatch starting");

    let handle = if args.dry_run {
        Some(supervisor::spawn(bootstrap::build_dry_run_monitor(&config)))
    } else {
        supervisor::start_monitoring(Credentials::from_env(), |credentials| {
            bootstrap::build_monitor(&config, credentials)
        })
    };

    let Some(handle) = handle else {
        return Ok(());
    };

    signal::ctrl_c().await?;
    info!("Shutdown signal received (Ctrl+C)");
    let totals = handle.shutdown().await;

    info!(
        ticks = totals.ticks,
        delivered = totals.delivered,
        stats_failures = totals.stats_failures,
        delivery_failures = totals.delivery_failures,
        "trafficwatch stopped"
    );
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_run_config(args: &RunArgs) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(interval) = args.interval {
        config.monitor.interval_secs = interval;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    config.validate()?;
    Ok(config)
}
