//! Homework status relay.
//!
//! Polls the review API for homework status changes and forwards them as chat
//! messages, suppressing repeats of the last message sent.

pub mod config;
mod error;
mod response;
mod source;
mod status;
mod watcher;

pub use config::WatcherConfig;
pub use error::{CycleError, SchemaError};
pub use response::{check_response, ValidatedResponse};
pub use source::{HomeworkSource, Notifier};
pub use status::{parse_status, HomeworkStatus};
pub use watcher::{CycleReport, HomeworkWatcher, ERROR_PREFIX};
