//! Process configuration
//!
//! Three credentials are required; everything else has a default.
//!
//! - PRACTICUM_TOKEN (required)
//! - TELEGRAM_TOKEN (required)
//! - TELEGRAM_CHAT_ID (required)
//! - RETRY_PERIOD (optional, seconds, default: 600)
//! - PRACTICUM_ENDPOINT (optional, default: the public homework statuses URL)
//! - REQUEST_TIMEOUT (optional, seconds, default: 30)

use std::time::Duration;

use clients_practicum::DEFAULT_ENDPOINT;
use thiserror::Error;
use url::Url;

pub const REQUIRED_VARIABLES: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Upper bound for interval settings: 30 days.
const MAX_SECONDS: u64 = 30 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Environment variable(s) not found: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    #[error("Environment variable {name} is invalid: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: Url,
    pub retry_period: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        check_tokens(&lookup)?;
        let required = |name: &str| lookup(name).map(|v| v.trim().to_string()).unwrap_or_default();

        let endpoint = match non_empty(&lookup, "PRACTICUM_ENDPOINT") {
            Some(raw) => parse_endpoint(&raw)?,
            None => parse_endpoint(DEFAULT_ENDPOINT)?,
        };

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN"),
            telegram_token: required("TELEGRAM_TOKEN"),
            telegram_chat_id: required("TELEGRAM_CHAT_ID"),
            endpoint,
            retry_period: seconds(&lookup, "RETRY_PERIOD", DEFAULT_RETRY_PERIOD_SECS)?,
            request_timeout: seconds(&lookup, "REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?,
        })
    }
}

/// Fails with every required variable that is unset or blank.
pub fn check_tokens<F>(lookup: F) -> Result<(), ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing: Vec<&'static str> = REQUIRED_VARIABLES
        .into_iter()
        .filter(|name| non_empty(&lookup, name).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::MissingVariables(missing))
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn seconds<F>(lookup: &F, name: &'static str, default: u64) -> Result<Duration, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(lookup, name) else {
        return Ok(Duration::from_secs(default));
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigurationError::InvalidValue {
            name,
            reason: "must be greater than 0".to_string(),
        }),
        Ok(secs) if secs > MAX_SECONDS => Err(ConfigurationError::InvalidValue {
            name,
            reason: format!("must not exceed {} seconds", MAX_SECONDS),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigurationError::InvalidValue {
            name,
            reason: format!("{:?} is not a number of seconds: {}", raw, e),
        }),
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigurationError> {
    let invalid = |reason: String| ConfigurationError::InvalidValue {
        name: "PRACTICUM_ENDPOINT",
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}
