use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, warn};

use crate::config::{TelegramConfig, NOTIFY_TIMEOUT};

/// Sends contact notifications through the Telegram Bot API.
///
/// One best-effort `sendMessage` POST per invocation: no retries, no queue.
/// Every failure mode collapses into `false` so a broken bot never breaks
/// the contact form itself.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

impl Notifier {
    pub fn new(config: TelegramConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(NOTIFY_TIMEOUT)
            .build()
            .context("failed to build Telegram HTTP client")?;

        Ok(Notifier { client, config })
    }

    /// Delivers `text` to the configured chat. Returns whether the provider
    /// acknowledged the message; missing credentials short-circuit to `false`
    /// without touching the network.
    pub async fn send(&self, text: &str) -> bool {
        if !self.config.is_configured() {
            warn!("Telegram credentials not set; skipping send");
            return false;
        }

        let url = format!(
            "{}/bot{}/sendMessage",
            self.config.api_base, self.config.bot_token
        );
        let payload = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        match self.client.post(&url).json(&payload).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    true
                } else {
                    error!("Telegram send failed with status {}", status);
                    false
                }
            }
            Err(err) => {
                error!("Telegram send failed: {}", err);
                false
            }
        }
    }
}
