//! Poll loop: fetch, validate, parse, notify, sleep.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::WatcherConfig;
use crate::error::CycleError;
use crate::response::check_response;
use crate::source::{HomeworkSource, Notifier};
use crate::status::parse_status;

/// Prefix of the chat message sent when a cycle fails.
pub const ERROR_PREFIX: &str = "Сбой в работе программы";

/// Outcome of a successful poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Homework records in the answer
    pub received: usize,
    /// Messages handed to the notifier (repeats excluded)
    pub notified: usize,
    /// Cursor after the cycle
    pub cursor: i64,
}

/// Mutable state carried between cycles.
#[derive(Debug)]
struct PollState {
    cursor: i64,
    last_message: Option<String>,
}

/// Homework watcher
///
/// Polls a [`HomeworkSource`] every `retry_period` and relays status changes
/// through a [`Notifier`]. A message equal to the last one handed to the notifier
/// is never sent again, whether it is a status or an error message.
pub struct HomeworkWatcher<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
    state: PollState,
}

impl<S, N> HomeworkWatcher<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    pub fn new(config: WatcherConfig, source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            retry_period: config.retry_period,
            state: PollState {
                cursor: config.initial_cursor,
                last_message: None,
            },
        }
    }

    /// `from_date` of the next request.
    pub fn cursor(&self) -> i64 {
        self.state.cursor
    }

    /// Last text handed to the notifier, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.state.last_message.as_deref()
    }

    /// Polls forever. Cycle failures are reported and never end the loop.
    pub async fn run(&mut self) {
        info!(
            "Starting homework watcher (interval: {:?}, from_date: {})",
            self.retry_period, self.state.cursor
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    async fn poll_once(&mut self) {
        let outcome = self.run_cycle().await;
        self.report_outcome(&outcome).await;
    }

    /// Logs the cycle outcome; a failure is also relayed to the chat.
    async fn report_outcome(&mut self, outcome: &Result<CycleReport, CycleError>) {
        match outcome {
            Ok(report) if report.notified > 0 => info!(
                "Relayed {} of {} homework update(s), cursor now {}",
                report.notified, report.received, report.cursor
            ),
            Ok(report) => debug!("Cycle done, cursor now {}", report.cursor),
            Err(e) => {
                let kind = match e {
                    CycleError::Request(_) => "request",
                    CycleError::Schema(_) => "schema",
                };
                error!(kind, cursor = self.state.cursor, "Poll cycle failed: {}", e);
                self.notify_once(format!("{}: {}", ERROR_PREFIX, e)).await;
            }
        }
    }

    async fn run_cycle(&mut self) -> Result<CycleReport, CycleError> {
        let body = self.source.fetch_since(self.state.cursor).await?;
        let response = check_response(body)?;

        let mut notified = 0;
        if response.homeworks.is_empty() {
            debug!("No new homework statuses");
        }
        for record in &response.homeworks {
            let message = parse_status(record)?;
            if self.notify_once(message).await {
                notified += 1;
            }
        }

        // Only reached when every record parsed.
        self.state.cursor = response.current_date;

        Ok(CycleReport {
            received: response.homeworks.len(),
            notified,
            cursor: self.state.cursor,
        })
    }

    /// Sends `message` unless it repeats the last one. Returns whether a send was attempted.
    async fn notify_once(&mut self, message: String) -> bool {
        if self.state.last_message.as_deref() == Some(message.as_str()) {
            debug!("Suppressing repeated message: {}", message);
            return false;
        }
        self.send_message(&message).await;
        self.state.last_message = Some(message);
        true
    }

    /// Best effort: failures are logged and dropped.
    async fn send_message(&self, text: &str) {
        match self.notifier.push_message(text).await {
            Ok(()) => debug!("Telegram message has been sent"),
            Err(e) => error!("Bot failed to send message \"{}\": {}", text, e),
        }
    }
}
