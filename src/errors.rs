// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the VinylDNS CLI.
//!
//! Two layers:
//! - [`ApiError`] - failures talking to the VinylDNS HTTP API
//! - [`CommandError`] - what a command handler reports to the user
//!
//! Usage and validation errors are raised before any API call. Backend errors
//! are carried verbatim so the user sees exactly what the API said.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::types::ZoneStatus;

/// Process exit code for every failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can occur while calling the VinylDNS HTTP API.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Resource not found (HTTP 404)
    ///
    /// Kept separate from other HTTP failures so callers can treat absence as
    /// a normal outcome (existence checks, teardown of already-deleted zones).
    #[error("{message}")]
    NotFound {
        /// Request URL that returned 404
        url: String,
        /// Response body from the API
        message: String,
    },

    /// Any other non-success HTTP status
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Request URL
        url: String,
        /// Response body from the API, verbatim
        message: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// Request URL
        url: String,
        /// Underlying client error
        reason: String,
    },

    /// The response body was not the JSON we expected
    #[error("unexpected response from {url}: {reason}")]
    Decode {
        /// Request URL
        url: String,
        /// Deserialization error
        reason: String,
    },

    /// The configured host or a request path could not form a valid URL
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Parse error
        reason: String,
    },
}

impl ApiError {
    /// Build the error for a non-success response.
    ///
    /// Empty bodies are replaced with the canonical status text so the user
    /// never sees a blank error line.
    #[must_use]
    pub fn from_status(status: StatusCode, url: &str, body: String) -> Self {
        let message = if body.trim().is_empty() {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )
        } else {
            body
        };

        if status == StatusCode::NOT_FOUND {
            Self::NotFound {
                url: url.to_string(),
                message,
            }
        } else {
            Self::Http {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            }
        }
    }

    /// True for HTTP 404 responses.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors reported by command handlers.
///
/// Every variant maps to exit code 1; the variants exist so callers can react
/// differently (for example, skip cleanup on [`CommandError::NotFound`]).
#[derive(Error, Debug)]
pub enum CommandError {
    /// Conflicting or missing flags
    #[error("{0}")]
    Usage(String),

    /// Flag values that are present but not acceptable together
    #[error("{message}")]
    Validation {
        /// User-facing explanation
        message: String,
        /// Flags that would have made the input valid
        missing: Vec<String>,
    },

    /// A zone or group looked up by name or id does not exist
    #[error("{kind} '{key}' not found")]
    NotFound {
        /// "zone" or "group"
        kind: &'static str,
        /// The name or id that was looked up
        key: String,
    },

    /// The backend gave up on a zone change before it took effect
    #[error("zone {zone_id} reached status {status} instead of becoming Active")]
    ZoneAbandoned {
        /// Id of the zone that was being created
        zone_id: String,
        /// Terminal status the backend reported
        status: ZoneStatus,
    },

    /// An asynchronous change never became observable
    #[error("timed out waiting for {what} after {attempts} attempts ({elapsed:?})")]
    PollTimeout {
        /// Description of the awaited condition
        what: String,
        /// Number of checks performed
        attempts: u32,
        /// Time spent polling
        elapsed: Duration,
    },

    /// Failure reported by the API
    #[error(transparent)]
    Backend(#[from] ApiError),

    /// Output could not be serialized
    #[error("failed to render output: {0}")]
    Render(String),
}

impl CommandError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// True when the error means the looked-up entity does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Backend(api) => api.is_not_found(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render(err.to_string())
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
