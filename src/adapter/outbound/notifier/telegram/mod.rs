//! Telegram Bot API delivery.
//!
//! Sends reports with a single `sendMessage` call per report, using HTML
//! parse mode.

mod notifier;

pub use notifier::{
    mask_token, SendMessageRequest, TelegramConfig, TelegramNotifier, DEFAULT_API_BASE,
};
