use thiserror::Error;

/// Failure of a single review API request.
#[derive(Debug, Error)]
pub enum RequestFailedError {
    /// The API answered with a status other than 200
    #[error("API request failed: {code}")]
    Status { code: u16 },

    /// Network level failure (timeout, DNS, connection reset)
    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Status was 200 but the body is not JSON
    #[error("API returned a body that is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl RequestFailedError {
    /// HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}
