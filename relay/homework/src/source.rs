//! Seams between the watcher and the outside world.

use async_trait::async_trait;
use clients_practicum::{PracticumClient, RequestFailedError};
use clients_telegrambot::{NotificationSendError, TelegramBot};
use serde_json::Value;

/// Where homework statuses come from.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Returns the raw API answer for homeworks updated since `from_date`.
    async fn fetch_since(&self, from_date: i64) -> Result<Value, RequestFailedError>;
}

/// Where notifications go.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn push_message(&self, text: &str) -> Result<(), NotificationSendError>;
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch_since(&self, from_date: i64) -> Result<Value, RequestFailedError> {
        self.get_api_answer(from_date).await
    }
}

#[async_trait]
impl Notifier for TelegramBot {
    async fn push_message(&self, text: &str) -> Result<(), NotificationSendError> {
        TelegramBot::push_message(self, text).await
    }
}
