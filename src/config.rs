use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Timeout for a single outbound Telegram call.
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub debug: bool,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        if port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        let debug = matches!(
            env::var("DEBUG").unwrap_or_default().as_str(),
            "1" | "true" | "TRUE"
        );

        Ok(Config {
            port,
            debug,
            telegram: TelegramConfig::from_env(),
        })
    }
}

impl TelegramConfig {
    /// Both identifiers are optional: when either is missing the notifier
    /// degrades to a no-op that reports `false` instead of refusing to start.
    pub fn from_env() -> Self {
        TelegramConfig {
            bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_BASE.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.chat_id.trim().is_empty()
    }
}
