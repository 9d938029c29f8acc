// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Waiting out the backend's eventual consistency.
//!
//! VinylDNS accepts zone and group mutations before they are visible to reads.
//! The functions here re-query the backend until the expected state is observed,
//! with exponential backoff between checks and a hard bound on both the number
//! of checks and the total time spent.
//!
//! Backend errors during a poll abort it immediately; they are never retried.

use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::api::ZoneApi;
use crate::constants::{
    DEFAULT_POLL_MAX_ATTEMPTS, DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_SECS,
    POLL_BACKOFF_MULTIPLIER, POLL_INITIAL_INTERVAL_MILLIS, POLL_MAX_INTERVAL_SECS,
    POLL_RANDOMIZATION_FACTOR,
};
use crate::errors::{ApiError, CommandError};
use crate::types::ZoneStatus;

/// Bounds and pacing for consistency polls.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSettings {
    /// Maximum number of checks before giving up
    pub max_attempts: u32,
    /// Maximum total time before giving up
    pub timeout: Duration,
    /// Interval after the first unsuccessful check
    pub initial_interval: Duration,
    /// Cap on the interval between checks
    pub max_interval: Duration,
    /// Fixed delay covering propagation lag an existence check cannot see
    pub settle_delay: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
            initial_interval: Duration::from_millis(POLL_INITIAL_INTERVAL_MILLIS),
            max_interval: Duration::from_secs(POLL_MAX_INTERVAL_SECS),
            settle_delay: Duration::from_secs(DEFAULT_SETTLE_DELAY_SECS),
        }
    }
}

/// Simple exponential backoff implementation.
///
/// Provides exponential backoff with randomization (jitter) between poll checks.
pub struct ExponentialBackoff {
    /// Current interval duration
    pub current_interval: Duration,
    /// Maximum interval duration
    pub max_interval: Duration,
    /// Backoff multiplier (typically 2.0 for doubling)
    pub multiplier: f64,
    /// Randomization factor (e.g., 0.1 for ±10%)
    pub randomization_factor: f64,
}

impl ExponentialBackoff {
    #[must_use]
    pub fn new(settings: &PollSettings) -> Self {
        Self {
            current_interval: settings.initial_interval,
            max_interval: settings.max_interval,
            multiplier: POLL_BACKOFF_MULTIPLIER,
            randomization_factor: POLL_RANDOMIZATION_FACTOR,
        }
    }

    /// Get the next interval and grow the following one.
    pub fn next_backoff(&mut self) -> Duration {
        let interval = self.current_interval;
        let jittered = self.apply_jitter(interval);

        let next = interval.as_secs_f64() * self.multiplier;
        self.current_interval = Duration::from_secs_f64(next).min(self.max_interval);

        jittered
    }

    /// Apply randomization (jitter) to an interval.
    fn apply_jitter(&self, interval: Duration) -> Duration {
        if self.randomization_factor == 0.0 {
            return interval;
        }

        let secs = interval.as_secs_f64();
        let delta = secs * self.randomization_factor;
        let jittered = rand::rng().random_range((secs - delta)..=(secs + delta));

        Duration::from_secs_f64(jittered.max(0.0))
    }
}

/// Re-run `check` until it reports `true`.
///
/// Each iteration issues exactly one check. Between checks the poll sleeps for
/// the next backoff interval, never past the deadline.
///
/// # Arguments
///
/// * `what` - Description of the awaited condition, used in logs and errors
/// * `settings` - Attempt and time bounds
/// * `check` - One backend query; `Ok(true)` means the condition holds
///
/// # Errors
///
/// * The check's own error as soon as a check fails
/// * [`CommandError::PollTimeout`] when attempts or time run out
pub async fn poll_until<F, Fut, E>(
    what: &str,
    settings: &PollSettings,
    mut check: F,
) -> Result<(), CommandError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: Into<CommandError>,
{
    let mut backoff = ExponentialBackoff::new(settings);
    let start_time = Instant::now();
    let mut attempt = 0;

    loop {
        attempt += 1;

        if check().await.map_err(Into::into)? {
            debug!(
                condition = what,
                attempt = attempt,
                elapsed = ?start_time.elapsed(),
                "Poll condition satisfied"
            );
            return Ok(());
        }

        let elapsed = start_time.elapsed();
        if attempt >= settings.max_attempts || elapsed >= settings.timeout {
            warn!(
                condition = what,
                attempt = attempt,
                elapsed = ?elapsed,
                "Poll gave up before condition was observed"
            );
            return Err(CommandError::PollTimeout {
                what: what.to_string(),
                attempts: attempt,
                elapsed,
            });
        }

        let remaining = settings.timeout.saturating_sub(elapsed);
        let delay = backoff.next_backoff().min(remaining);
        debug!(
            condition = what,
            attempt = attempt,
            retry_after = ?delay,
            "Poll condition not yet observed"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Wait until a newly created zone reads back as `Active`.
///
/// A 404 counts as "not yet": the zone may not be readable right after creation.
/// A `Deleted` status means the backend abandoned the create, so polling stops.
///
/// # Errors
///
/// Backend errors other than 404, [`CommandError::ZoneAbandoned`], or
/// [`CommandError::PollTimeout`].
pub async fn wait_for_zone_active<A>(
    api: &A,
    zone_id: &str,
    settings: &PollSettings,
) -> Result<(), CommandError>
where
    A: ZoneApi + ?Sized,
{
    let what = format!("zone {zone_id} to become Active");
    poll_until(&what, settings, move || async move {
        match api.get_zone(zone_id).await {
            Ok(zone) if zone.status == Some(ZoneStatus::Deleted) => {
                Err(CommandError::ZoneAbandoned {
                    zone_id: zone_id.to_string(),
                    status: ZoneStatus::Deleted,
                })
            }
            Ok(zone) => Ok(zone.is_active()),
            Err(ApiError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    })
    .await
}

/// Wait until a deleted zone no longer exists.
///
/// # Errors
///
/// Any backend error, or [`CommandError::PollTimeout`].
pub async fn wait_for_zone_absent<A>(
    api: &A,
    zone_id: &str,
    settings: &PollSettings,
) -> Result<(), CommandError>
where
    A: ZoneApi + ?Sized,
{
    let what = format!("zone {zone_id} to be deleted");
    poll_until(&what, settings, move || async move {
        api.zone_exists(zone_id).await.map(|exists| !exists)
    })
    .await
}

/// Wait until a deleted group can no longer be read.
///
/// # Errors
///
/// Backend errors other than 404, or [`CommandError::PollTimeout`].
pub async fn wait_for_group_absent<A>(
    api: &A,
    group_id: &str,
    settings: &PollSettings,
) -> Result<(), CommandError>
where
    A: ZoneApi + ?Sized,
{
    let what = format!("group {group_id} to be deleted");
    poll_until(&what, settings, move || async move {
        match api.get_group(group_id).await {
            Ok(_) => Ok(false),
            Err(ApiError::NotFound { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    })
    .await
}

/// Sleep for the settle delay.
///
/// Applied once after a zone becomes Active and once between deleting a zone
/// and deleting its admin group.
pub async fn settle(settings: &PollSettings, reason: &str) {
    if settings.settle_delay.is_zero() {
        return;
    }
    info!(delay = ?settings.settle_delay, reason = reason, "Waiting for backend to settle");
    tokio::time::sleep(settings.settle_delay).await;
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod poller_tests;
