//! Reporting loop configuration.

use serde::Deserialize;

const fn default_interval_secs() -> u64 {
    300
}

/// `[monitor]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorAppConfig {
    /// Seconds between reports (default: 300).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for MonitorAppConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}
