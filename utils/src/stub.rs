//! Canned-response HTTP server for client tests.
//!
//! Every request gets the same status and JSON body; the first one is captured so the
//! test can inspect what the client actually sent.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Request as seen by the stub.
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    /// Header value as text, if present and printable.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

struct StubState {
    status: StatusCode,
    body: String,
    first: Mutex<Option<oneshot::Sender<CapturedRequest>>>,
}

pub struct StubServer {
    /// Base URL, e.g. `http://127.0.0.1:40123`
    pub url: String,
    captured: oneshot::Receiver<CapturedRequest>,
}

impl StubServer {
    /// Starts answering every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> std::io::Result<Self> {
        let (tx, captured) = oneshot::channel();
        let state = Arc::new(StubState {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
            first: Mutex::new(Some(tx)),
        });
        let app = Router::new().fallback(answer).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let url = format!("http://{}", listener.local_addr()?);
        tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(Self { url, captured })
    }

    /// Waits for the first request the server received.
    pub async fn request(self) -> CapturedRequest {
        match self.captured.await {
            Ok(request) => request,
            Err(_) => panic!("stub server never received a request"),
        }
    }
}

async fn answer(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let sender = state.first.lock().ok().and_then(|mut first| first.take());
    if let Some(sender) = sender {
        // The test may have stopped waiting.
        let _ = sender.send(CapturedRequest {
            method,
            uri,
            headers,
            body,
        });
    }
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
        .into_response()
}

/// Returns a URL nothing listens on.
pub async fn refused_url() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}", listener.local_addr()?);
    drop(listener);
    Ok(url)
}
