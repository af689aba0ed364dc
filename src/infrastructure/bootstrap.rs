//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::notifier::telegram::TelegramNotifier;
use crate::adapter::outbound::notifier::LogNotifier;
use crate::adapter::outbound::xray::XrayStatsClient;
use crate::application::monitor::Monitor;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::port::{Notifier, StatsSource};

/// Build the stats client with the configured decoder.
#[must_use]
pub fn build_stats_source(config: &Config) -> Arc<dyn StatsSource> {
    let decoder = config.stats.decoder.build();
    info!(
        address = %config.stats.address,
        decoder = decoder.name(),
        "Stats client configured"
    );
    Arc::new(XrayStatsClient::new(config.stats.client_config(), decoder))
}

/// Build the Telegram notifier for `credentials`.
#[must_use]
pub fn build_telegram_notifier(config: &Config, credentials: &Credentials) -> Arc<dyn Notifier> {
    let telegram = config.telegram_config(credentials);
    info!(chat_id = %telegram.chat_id, "Telegram notifier enabled");
    Arc::new(TelegramNotifier::new(telegram))
}

/// Build a monitor that posts to Telegram.
#[must_use]
pub fn build_monitor(config: &Config, credentials: &Credentials) -> Monitor {
    Monitor::new(
        build_stats_source(config),
        build_telegram_notifier(config, credentials),
        config.interval(),
    )
}

/// Build a monitor that only logs its reports.
#[must_use]
pub fn build_dry_run_monitor(config: &Config) -> Monitor {
    Monitor::new(
        build_stats_source(config),
        Arc::new(LogNotifier),
        config.interval(),
    )
}
