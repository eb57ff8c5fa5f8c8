//! Shared utilities for the homework relay workspace.

use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "test-server")]
pub mod stub;

/// Current Unix time in whole seconds.
///
/// A clock set before the epoch yields 0 rather than an error.
pub fn unix_timestamp_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
