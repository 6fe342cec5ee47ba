//! Pacing of Redmine API calls.
//!
//! The importer waits a fixed interval after every issue creation attempt,
//! successful or not. Nothing else runs during the wait.

use std::time::Duration;
use tracing::debug;

/// Fixed-interval pause between consecutive destination requests.
#[derive(Debug, Clone, Copy)]
pub struct RequestPacer {
    interval: Duration,
}

impl RequestPacer {
    /// Creates a pacer that waits `interval` per request.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits for the configured interval.
    pub async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        debug!(wait_ms = self.interval.as_millis() as u64, "Pausing before next request");
        tokio::time::sleep(self.interval).await;
    }
}
