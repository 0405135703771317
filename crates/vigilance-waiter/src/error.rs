// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaitError>;

#[derive(Debug, Error)]
pub enum WaitError {
    /// A poll was answered with something other than 200. Polling stops
    /// immediately; this is not retried.
    #[error("Received {status} response from server")]
    UnexpectedResponse { status: StatusCode },

    /// The entity never reported the target status within the budget.
    #[error("Entity {entity_id} failed to reach status '{status}' within {max_wait:?}")]
    Timeout {
        entity_id: String,
        status: String,
        max_wait: Duration,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}
