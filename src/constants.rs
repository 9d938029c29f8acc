// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the VinylDNS CLI.
//!
//! This module contains all numeric and string constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Connection Defaults
// ============================================================================

/// Default VinylDNS API endpoint when neither `--host` nor `VINYLDNS_HOST` is set
pub const DEFAULT_HOST: &str = "http://localhost:9000";

/// Environment variable holding the API endpoint
pub const ENV_HOST: &str = "VINYLDNS_HOST";

/// Environment variable holding the access key
pub const ENV_ACCESS_KEY: &str = "VINYLDNS_ACCESS_KEY";

/// Environment variable holding the secret key
pub const ENV_SECRET_KEY: &str = "VINYLDNS_SECRET_KEY";

/// Environment variable selecting the output format
pub const ENV_OUTPUT: &str = "VINYLDNS_OUTPUT";

/// Environment variable overriding the poll deadline (seconds)
pub const ENV_POLL_TIMEOUT: &str = "VINYLDNS_POLL_TIMEOUT";

/// Environment variable overriding the poll attempt budget
pub const ENV_POLL_ATTEMPTS: &str = "VINYLDNS_POLL_ATTEMPTS";

/// Environment variable overriding the settle delay (seconds)
pub const ENV_SETTLE_DELAY: &str = "VINYLDNS_SETTLE_DELAY";

// ============================================================================
// HTTP API Constants
// ============================================================================

/// Page size requested from list endpoints
pub const LIST_PAGE_SIZE: u32 = 100;

/// Upper bound on pages followed by a single list call
pub const MAX_LIST_PAGES: usize = 1000;

/// Per-request timeout for the HTTP client (seconds)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// Request Signing Constants
// ============================================================================

/// Service name used in the SigV4 credential scope
pub const SIGNING_SERVICE: &str = "VinylDNS";

/// Region used in the SigV4 credential scope
pub const SIGNING_REGION: &str = "us-east-1";

/// SigV4 algorithm identifier
pub const SIGNING_ALGORITHM: &str = "AWS4-HMAC-SHA256";

// ============================================================================
// Consistency Polling Constants
// ============================================================================

/// Maximum number of existence/state checks per poll
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 60;

/// Maximum total time spent in a single poll (2 minutes)
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 120;

/// First interval between checks (250ms)
pub const POLL_INITIAL_INTERVAL_MILLIS: u64 = 250;

/// Largest interval between checks (5 seconds)
pub const POLL_MAX_INTERVAL_SECS: u64 = 5;

/// Backoff multiplier (exponential growth factor)
pub const POLL_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Randomization factor applied to each interval (±10%)
pub const POLL_RANDOMIZATION_FACTOR: f64 = 0.1;

/// Fixed delay after zone creation and between zone and admin group deletion.
///
/// The backend keeps treating a group as a zone admin for a short window after
/// the zone is gone, which an existence check does not reveal.
pub const DEFAULT_SETTLE_DELAY_SECS: u64 = 3;

// ============================================================================
// Output Messages
// ============================================================================

/// Shown in text mode when the zone list is empty
pub const NO_ZONES_FOUND: &str = "No zones found";

/// Shown in text mode when the group list is empty
pub const NO_GROUPS_FOUND: &str = "No groups found";
