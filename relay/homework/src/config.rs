//! Configuration types for HomeworkWatcher.

use std::time::Duration;

/// Configuration for HomeworkWatcher (parameters only; clients are passed to `HomeworkWatcher::new`).
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Fixed delay between the end of one poll cycle and the start of the next
    pub retry_period: Duration,
    /// Unix timestamp used as `from_date` for the first request
    pub initial_cursor: i64,
}

impl WatcherConfig {
    /// Starts one `retry_period` before `now`, so a restart picks up the changes
    /// made while the process was down for up to one interval.
    pub fn looking_back(retry_period: Duration, now: i64) -> Self {
        let period = i64::try_from(retry_period.as_secs()).unwrap_or(i64::MAX);
        Self {
            retry_period,
            initial_cursor: now.saturating_sub(period),
        }
    }
}
