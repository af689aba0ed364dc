//! Chat credentials read from the process environment.

use std::fmt;

use crate::adapter::outbound::notifier::telegram::mask_token;

/// Environment variable holding the bot token.
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
/// Environment variable holding the target chat ID.
pub const CHAT_ID_VAR: &str = "CHAT_ID";

/// Bot token and chat ID, both guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    bot_token: String,
    chat_id: String,
}

impl Credentials {
    /// Build credentials, returning `None` if either value is blank.
    #[must_use]
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Option<Self> {
        let bot_token = bot_token.into().trim().to_string();
        let chat_id = chat_id.into().trim().to_string();
        if bot_token.is_empty() || chat_id.is_empty() {
            return None;
        }
        Some(Self { bot_token, chat_id })
    }

    /// Read `BOT_TOKEN` and `CHAT_ID` through `lookup`.
    ///
    /// Missing or empty values mean monitoring is disabled, which is not an
    /// error, so this returns `None` rather than failing.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(BOT_TOKEN_VAR)?, lookup(CHAT_ID_VAR)?)
    }

    /// Read credentials from the process environment.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    #[must_use]
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
