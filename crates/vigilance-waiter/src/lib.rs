// SPDX-License-Identifier: GPL-3.0-or-later

//! Status polling for functional test suites.
//!
//! This crate waits for an HTTP resource to reach an expected status: it
//! issues sequential GET requests against a resource path, decodes the JSON
//! body, and compares the reported `status` field against a target value
//! until it matches, the wall-clock budget runs out, or the server answers
//! with anything other than 200.

pub mod entity;
pub mod error;
pub mod options;
pub mod waiter;

pub use entity::Entity;
pub use error::{Result, WaitError};
pub use options::{WaitOptions, DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL, DEFAULT_STATUS};
pub use waiter::{StatusWaiter, StatusWaiterBuilder};
