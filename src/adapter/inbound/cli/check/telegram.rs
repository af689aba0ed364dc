use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::adapter::outbound::notifier::telegram::mask_token;
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;

const TEST_MESSAGE: &str = "<b>✅ trafficwatch test message</b>\nTelegram delivery is working.";

/// Test Telegram delivery by sending a test message.
pub async fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let credentials = Credentials::from_env().ok_or(ConfigError::MissingField {
        field: "BOT_TOKEN and CHAT_ID",
    })?;

    println!("Telegram Check");
    println!("  Bot token: {}", mask_token(credentials.bot_token()));
    println!("  Chat ID:   {}", credentials.chat_id());

    let notifier = bootstrap::build_telegram_notifier(&config, &credentials);
    notifier.send(TEST_MESSAGE).await?;

    println!("  Sent test message; check Telegram for it");
    Ok(())
}
