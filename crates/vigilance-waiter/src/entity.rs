// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;

/// Snapshot of the polled resource, decoded fresh from every response body.
///
/// Only the `status` field matters to the waiter; any other fields in the
/// body are ignored. A body without a `status` field fails to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    /// Status currently reported by the server.
    pub status: String,
}

/// Trailing `/`-delimited segment of the request path, used to identify the
/// entity in timeout diagnostics. A path without a `/` is returned whole.
pub(crate) fn entity_id(request_path: &str) -> &str {
    match request_path.rsplit_once('/') {
        Some((_, id)) => id,
        None => request_path,
    }
}
