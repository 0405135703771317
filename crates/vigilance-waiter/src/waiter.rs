// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

use crate::entity::{entity_id, Entity};
use crate::error::{Result, WaitError};
use crate::options::WaitOptions;

const USER_AGENT: &str = concat!("vigilance-waiter/", env!("CARGO_PKG_VERSION"));

/// Polls an HTTP endpoint until the entity behind it reports an expected
/// status.
///
/// A waiter holds nothing but an HTTP client, so it is cheap to clone and
/// safe to use from concurrent tasks as long as each call targets its own
/// path. Within one call, polling is strictly sequential: every request is
/// awaited before the next one is issued.
#[derive(Debug, Clone)]
pub struct StatusWaiter {
    client: Client,
}

impl StatusWaiter {
    /// Create a waiter with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a waiter builder for custom configuration.
    pub fn builder() -> StatusWaiterBuilder {
        StatusWaiterBuilder::default()
    }

    /// Wrap a caller-built client, e.g. one shared across a test suite.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Performs a time-bounded wait for the entity at `request_path` to
    /// reach the requested status.
    ///
    /// The path must be a full URL whose trailing segment identifies the
    /// entity; `headers` are forwarded verbatim on every request. The call
    /// returns once the entity's `status` field equals `options.status`, and
    /// fails when the budget elapses first, when any poll is answered with a
    /// non-200 code, or when a response body cannot be decoded. Transport
    /// failures are never retried.
    ///
    /// # Example
    /// ```no_run
    /// use reqwest::header::HeaderMap;
    /// use vigilance_waiter::{StatusWaiter, WaitOptions};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let waiter = StatusWaiter::new()?;
    /// waiter
    ///     .wait_for_status(
    ///         "http://localhost:9292/v2/images/abc-123",
    ///         &HeaderMap::new(),
    ///         &WaitOptions::new(),
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn wait_for_status(
        &self,
        request_path: &str,
        headers: &HeaderMap,
        options: &WaitOptions,
    ) -> Result<()> {
        let deadline = Instant::now() + options.max_wait;

        // The deadline is already fixed, so the initial delay consumes part
        // of the budget; a delay longer than max_wait means zero polls.
        if let Some(delay) = options.initial_delay {
            if !delay.is_zero() {
                sleep(delay).await;
            }
        }

        while Instant::now() <= deadline {
            trace!(target: "waiter", "GET {}", request_path);

            let response = self
                .client
                .get(request_path)
                .headers(headers.clone())
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::OK {
                return Err(WaitError::UnexpectedResponse { status });
            }

            let body = response.text().await?;
            let entity: Entity = serde_json::from_str(&body)?;
            debug!(
                target: "waiter",
                "{} response, entity reports status '{}'",
                status,
                entity.status
            );

            if entity.status == options.status {
                return Ok(());
            }

            sleep(options.poll_interval).await;
        }

        Err(WaitError::Timeout {
            entity_id: entity_id(request_path).to_string(),
            status: options.status.clone(),
            max_wait: options.max_wait,
        })
    }
}

/// Builder for configuring a waiter.
#[derive(Debug)]
pub struct StatusWaiterBuilder {
    http_timeout: Option<Duration>,
    user_agent: String,
}

impl Default for StatusWaiterBuilder {
    fn default() -> Self {
        Self {
            http_timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl StatusWaiterBuilder {
    /// Set a per-request timeout. By default requests carry none, matching
    /// the untimed GET of the polled endpoint.
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Set a custom User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the waiter.
    pub fn build(self) -> Result<StatusWaiter> {
        let mut builder = Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(StatusWaiter {
            client: builder.build()?,
        })
    }
}
