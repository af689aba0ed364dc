//! Stats control-plane configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::xray::{DecoderKind, StatsClientConfig};

fn default_address() -> String {
    "127.0.0.1:10085".to_string()
}

const fn default_timeout_ms() -> u64 {
    2_000
}

/// `[stats]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsAppConfig {
    /// Control-plane `host:port`.
    #[serde(default = "default_address")]
    pub address: String,
    /// Deadline for one full query in milliseconds (default: 2000).
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Response decoder (default: `unknown`).
    #[serde(default)]
    pub decoder: DecoderKind,
}

impl StatsAppConfig {
    #[must_use]
    pub fn client_config(&self) -> StatsClientConfig {
        StatsClientConfig {
            address: self.address.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            ..StatsClientConfig::default()
        }
    }
}

impl Default for StatsAppConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_ms: default_timeout_ms(),
            decoder: DecoderKind::default(),
        }
    }
}
