//! Minimal framework config: token, optional API URL and log file path.
//! Loaded from env: TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::Result;
use std::env;

/// Minimal Telegram bot config (connectivity and logging only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. TOKEN falls back to an empty string and is not validated; teloxide rejects a bad token on
    /// the first request. TELEGRAM_API_URL and LOG_FILE are optional.
    pub fn from_env() -> Self {
        let bot_token = env::var("TOKEN").unwrap_or_default();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Self {
            bot_token,
            telegram_api_url,
            log_file,
        }
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Checks that telegram_api_url, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        self.api_url()?;
        Ok(())
    }

    /// Parsed API URL override, if any.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|url_str| {
                reqwest::Url::parse(url_str).map_err(|_| {
                    anyhow::anyhow!(
                        "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                        url_str
                    )
                })
            })
            .transpose()
    }

    /// Builds the teloxide Bot, pointing it at the API URL override when configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
