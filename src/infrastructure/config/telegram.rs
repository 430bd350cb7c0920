//! Telegram bot configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

const fn default_reveal_delay_ms() -> u64 {
    1000
}

/// Telegram bot configuration.
///
/// The bot token is never read from the config file; it comes from the
/// `BOT_TOKEN` (or `TELEGRAM_BOT_TOKEN`) environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API token, loaded from the environment at runtime.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// Pause between the "card is opening" notice and the reveal.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    /// Register the command list shown in Telegram's "/" menu on startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl TelegramAppConfig {
    /// Token from `BOT_TOKEN`, falling back to `TELEGRAM_BOT_TOKEN`.
    #[must_use]
    pub fn token_from_env() -> Option<String> {
        ["BOT_TOKEN", "TELEGRAM_BOT_TOKEN"]
            .into_iter()
            .find_map(|name| std::env::var(name).ok())
            .filter(|token| !token.trim().is_empty())
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            reveal_delay_ms: default_reveal_delay_ms(),
            register_commands: default_true(),
        }
    }
}
