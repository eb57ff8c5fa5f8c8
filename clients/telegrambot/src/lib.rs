use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Failure to deliver a message through the Bot API.
///
/// Wrapped `reqwest::Error`s never carry the request URL, since it embeds the bot token.
#[derive(Debug, Error)]
pub enum NotificationSendError {
    #[error("telegram request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("telegram answered with an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("telegram rejected the message (status {status}): {description}")]
    Rejected { status: u16, description: String },
}

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_key: String,
    chat_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given HTTP client, API key and chat ID.
    pub fn new(client: Client, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            api_key,
            chat_id,
            base_url: TELEGRAM_API_BASE.to_string(),
        }
    }

    /// Points the bot at another Bot API server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a plain text message to the configured chat.
    pub async fn push_message(&self, text: &str) -> Result<(), NotificationSendError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.api_key);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotificationSendError::Transport(e.without_url()))?;

        let status = resp.status();
        // The Bot API reports errors as JSON with ok=false, usually alongside a 4xx.
        let answer = resp.json::<BotApiResponse>().await;
        match answer {
            Ok(answer) if status.is_success() && answer.ok => {
                debug!("Telegram message delivered to chat {}", self.chat_id);
                Ok(())
            }
            Ok(answer) => Err(NotificationSendError::Rejected {
                status: status.as_u16(),
                description: answer
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) if !status.is_success() => Err(NotificationSendError::Rejected {
                status: status.as_u16(),
                description: "unreadable error body".to_string(),
            }),
            Err(e) => Err(NotificationSendError::Decode(e.without_url())),
        }
    }
}
