use url::Url;

/// Homework status endpoint of the review API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Configuration for PracticumClient
#[derive(Debug, Clone)]
pub struct PracticumClientConfig {
    /// OAuth token of the student account
    pub token: String,
    /// Full URL of the homework statuses endpoint
    pub endpoint: Url,
}
