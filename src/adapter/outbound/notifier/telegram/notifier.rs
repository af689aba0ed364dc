//! Telegram report notifier.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::NotifyError;
use crate::port::Notifier;

/// Public Telegram Bot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Delivery settings for [`TelegramNotifier`].
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID (numeric ID or `@channel` name).
    pub chat_id: String,
    /// Scheme and host of the Bot API, without trailing path.
    pub api_base: String,
    /// Bound on one `sendMessage` request.
    pub timeout: Duration,
}

impl TelegramConfig {
    /// Configuration targeting the public Bot API with a 10 second timeout.
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// `{api_base}/bot{token}/sendMessage`.
    #[must_use]
    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

// The token is a credential; keep it out of debug output.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Mask a bot token for display.
///
/// The bot id before `:` is shown as is. The secret part is fully hidden
/// unless it is longer than 8 characters, in which case its last 4 remain.
#[must_use]
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((bot_id, secret)) => format!("{bot_id}:{}", mask_secret(secret)),
        None => mask_secret(token),
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

/// JSON body of a `sendMessage` call.
///
/// Serialized with `serde_json`, which escapes quotes, backslashes and all
/// control characters in `text`.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
}

impl<'a> SendMessageRequest<'a> {
    #[must_use]
    pub const fn html(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: "HTML",
        }
    }
}

/// Notifier that posts reports to a Telegram chat.
pub struct TelegramNotifier {
    client: Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TelegramConfig {
        &self.config
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let request = SendMessageRequest::html(&self.config.chat_id, message);

        // Errors carry the request URL, which embeds the token.
        let response = self
            .client
            .post(self.config.send_message_url())
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::DeliveryRejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(chat_id = %self.config.chat_id, "Telegram message accepted");
        Ok(())
    }
}
