use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Enforces a minimum interval between requests to the dataset host
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval: Duration::from_millis(min_interval_ms),
            last_request: None,
        }
    }

    /// Sleep until the interval since the previous request has elapsed,
    /// then claim the current slot.
    pub async fn wait(&mut self) {
        if let Some(remaining) = self.remaining_delay() {
            sleep(remaining).await;
        }
        self.last_request = Some(Instant::now());
    }

    pub fn reset(&mut self) {
        self.last_request = None;
    }

    fn remaining_delay(&self) -> Option<Duration> {
        let last = self.last_request?;
        self.min_interval.checked_sub(last.elapsed())
    }
}
