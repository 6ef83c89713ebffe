//! Telegram Bot API client.
//!
//! The Bot API is a plain HTTPS POST, so this rides on reqwest directly.

use crate::events;
use async_trait::async_trait;
use chrono::Local;
use hypatia_error::{NotifyError, NotifyErrorKind};
use hypatia_interface::{AlertLevel, Notify, NotifierStatus};
use serde_json::json;
use tracing::{info, instrument, warn};

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Sends generation lifecycle events to a Telegram chat.
///
/// Construction never fails: an unconfigured notifier simply reports every
/// send as undelivered, matching the service's "notifications are never
/// fatal" contract.
pub struct TelegramNotifier {
    bot_token: Option<String>,
    chat_id: Option<String>,
    client: Option<reqwest::Client>,
    api_base: String,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("configured", &self.is_configured())
            .finish_non_exhaustive()
    }
}

impl TelegramNotifier {
    /// Build from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            std::env::var("TELEGRAM_CHAT_ID").ok(),
        )
    }

    /// Build from explicit credentials.
    pub fn new(bot_token: Option<String>, chat_id: Option<String>) -> Self {
        let client = if bot_token.is_some() {
            match reqwest::Client::builder().build() {
                Ok(client) => {
                    info!("telegram notifier initialized");
                    Some(client)
                }
                Err(e) => {
                    warn!(error = %e, "failed to build telegram http client");
                    None
                }
            }
        } else {
            warn!("telegram bot token not found in environment");
            None
        };
        Self {
            bot_token,
            chat_id,
            client,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Override the API base URL. Test hook.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Token, chat id and client are all present.
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some() && self.client.is_some()
    }

    /// Deliver a raw HTML message. Transport and API failures are returned,
    /// not swallowed; [`Self::send`] is the swallowing wrapper.
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let (Some(token), Some(chat_id), Some(client)) =
            (&self.bot_token, &self.chat_id, &self.client)
        else {
            return Err(NotifyError::new(NotifyErrorKind::NotConfigured));
        };

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let response = client
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
            }))
            .send()
            .await
            .map_err(|e| NotifyError::new(NotifyErrorKind::Http(e.to_string())))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::new(NotifyErrorKind::Api(format!(
                "{status}: {body}"
            ))));
        }
        Ok(())
    }

    /// Deliver a message, logging and swallowing any failure.
    #[instrument(skip(self, text))]
    pub async fn send(&self, text: &str) -> bool {
        match self.send_message(text).await {
            Ok(()) => {
                info!("telegram message sent");
                true
            }
            Err(e) => {
                warn!(error = %e, "telegram notification skipped");
                false
            }
        }
    }

    /// Deliver the daily statistics summary.
    pub async fn daily_stats(&self, total: u64, successful: u64, failed: u64) -> bool {
        self.send(&events::daily_stats_message(
            total,
            successful,
            failed,
            Local::now(),
        ))
        .await
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn generation_started(&self, concept: &str, requester: &str) -> bool {
        self.send(&events::start_message(concept, requester, Local::now()))
            .await
    }

    async fn generation_succeeded(
        &self,
        concept: &str,
        duration_secs: f64,
        file_size_mb: f64,
        requester: &str,
    ) -> bool {
        self.send(&events::success_message(
            concept,
            duration_secs,
            file_size_mb,
            requester,
            Local::now(),
        ))
        .await
    }

    async fn generation_failed(&self, concept: &str, details: &str, requester: &str) -> bool {
        self.send(&events::error_message(
            concept,
            details,
            requester,
            Local::now(),
        ))
        .await
    }

    async fn system_alert(&self, level: AlertLevel, message: &str) -> bool {
        self.send(&events::alert_message(level, message, Local::now()))
            .await
    }

    fn status(&self) -> NotifierStatus {
        NotifierStatus {
            configured: self.is_configured(),
            bot_token_exists: self.bot_token.is_some(),
            chat_id_exists: self.chat_id.is_some(),
            bot_instance_exists: self.client.is_some(),
        }
    }
}
