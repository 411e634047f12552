// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while acquiring the registry catalog from the management controller.

use thiserror::Error;

/// Failure of the one-time catalog fetch. Every variant is fatal at startup.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The controller could not be reached (DNS, TCP, TLS, or timeout).
    #[error("connection to {endpoint} failed: {reason}")]
    ConnectionFailure { endpoint: String, reason: String },

    /// The controller rejected the supplied credentials.
    #[error("access denied by {endpoint} for user '{username}' (HTTP {status})")]
    AccessDenied {
        endpoint: String,
        username: String,
        status: u16,
    },

    /// The controller answered, but not with a usable registry collection.
    #[error("invalid response from {uri}: {reason}")]
    InvalidResponse { uri: String, reason: String },
}

impl FetchError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, FetchError::AccessDenied { .. })
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self, FetchError::ConnectionFailure { .. })
    }
}
