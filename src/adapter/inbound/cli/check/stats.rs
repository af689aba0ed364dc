use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::domain::ReportMessage;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Query the stats API once and print the report that would be sent.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let stats = bootstrap::build_stats_source(&config);

    println!("Stats Check");
    println!("  Address: {}", config.stats.address);
    println!("  Decoder: {}", config.stats.decoder.build().name());

    let snapshot = stats.query().await?;
    println!();
    println!("{}", ReportMessage::now(&snapshot));
    Ok(())
}
