//! Telegram delivery configuration.

use serde::Deserialize;

use crate::adapter::outbound::notifier::telegram::DEFAULT_API_BASE;

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

/// `[telegram]` section. Credentials come from the environment, never from here.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API base URL (default: `https://api.telegram.org`).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
