use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::config::PracticumClientConfig;
use crate::error::RequestFailedError;

/// Client for the homework statuses review API.
pub struct PracticumClient {
    client: reqwest::Client,
    token: String,
    endpoint: url::Url,
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, config: PracticumClientConfig) -> Self {
        Self {
            client,
            token: config.token,
            endpoint: config.endpoint,
        }
    }

    /// Fetches homeworks updated since `from_date` (Unix seconds).
    ///
    /// The body is returned as untyped JSON; shape checks are left to the caller.
    pub async fn get_api_answer(&self, from_date: i64) -> Result<Value, RequestFailedError> {
        debug!("Requesting {} with from_date={}", self.endpoint, from_date);

        let resp = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(RequestFailedError::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(RequestFailedError::Status {
                code: status.as_u16(),
            });
        }

        resp.json::<Value>()
            .await
            .map_err(RequestFailedError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use utils::stub::{refused_url, StubServer};

    fn client_for(base: &str) -> PracticumClient {
        let endpoint = Url::parse(&format!("{}/api/user_api/homework_statuses/", base)).unwrap();
        PracticumClient::new(
            reqwest::Client::new(),
            PracticumClientConfig {
                token: "secret-token".to_string(),
                endpoint,
            },
        )
    }

    #[tokio::test]
    async fn sends_oauth_header_and_from_date() {
        let server = StubServer::start(200, r#"{"homeworks":[],"current_date":1000}"#)
            .await
            .unwrap();
        let client = client_for(&server.url);

        let body = client.get_api_answer(1234).await.unwrap();
        assert_eq!(body, json!({"homeworks": [], "current_date": 1000}));

        let request = server.request().await;
        assert_eq!(request.method.as_str(), "GET");
        assert_eq!(request.uri.path(), "/api/user_api/homework_statuses/");
        assert_eq!(request.uri.query(), Some("from_date=1234"));
        assert_eq!(request.header("authorization"), Some("OAuth secret-token"));
    }

    #[tokio::test]
    async fn non_200_is_status_error() {
        let server = StubServer::start(503, "not json at all")
            .await
            .unwrap();
        let client = client_for(&server.url);

        let err = client.get_api_answer(0).await.unwrap_err();
        assert!(matches!(err, RequestFailedError::Status { code: 503 }));
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.to_string(), "API request failed: 503");
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        let url = refused_url().await.unwrap();
        let client = client_for(&url);

        let err = client.get_api_answer(0).await.unwrap_err();
        assert!(matches!(err, RequestFailedError::Transport(_)));
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let server = StubServer::start(200, "<html>oops</html>").await.unwrap();
        let client = client_for(&server.url);

        let err = client.get_api_answer(0).await.unwrap_err();
        assert!(matches!(err, RequestFailedError::Decode(_)));
    }
}
