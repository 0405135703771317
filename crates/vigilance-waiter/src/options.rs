// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

/// Status an entity is expected to reach when none is given explicitly.
pub const DEFAULT_STATUS: &str = "active";

/// Wall-clock budget for the whole wait.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(10);

/// Sleep between consecutive unsuccessful polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Polling parameters, passed or defaulted at the call site.
///
/// The defaults reproduce the documented behavior of waiting up to 10 seconds
/// for the `"active"` status, re-checking every 200 milliseconds, with no
/// delay before the first poll.
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Target value compared for exact string equality against the entity's
    /// `status` field.
    pub status: String,
    /// Wall-clock budget measured from entry into the wait call.
    pub max_wait: Duration,
    /// Sleep between unsuccessful polls.
    pub poll_interval: Duration,
    /// Optional one-time sleep before the first poll. A zero duration is
    /// treated like `None`. The deadline is computed before this delay is
    /// slept, so the delay consumes part of the budget.
    pub initial_delay: Option<Duration>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            status: DEFAULT_STATUS.to_string(),
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            initial_delay: None,
        }
    }
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = Some(initial_delay);
        self
    }
}
