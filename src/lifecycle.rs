// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Setup and teardown of a zone together with its admin group.
//!
//! A zone cannot exist without an admin group, and the backend refuses to
//! delete a group while it still administers a zone. These helpers sequence
//! both directions explicitly:
//!
//! - setup: create group, create zone, wait until Active, settle
//! - teardown: delete zone, wait until absent, settle, delete group, wait
//!   until absent
//!
//! They are used by integration suites that need a throwaway zone.

use tracing::{debug, info};

use crate::api::ZoneApi;
use crate::errors::CommandError;
use crate::poller::{
    settle, wait_for_group_absent, wait_for_zone_absent, wait_for_zone_active, PollSettings,
};
use crate::types::{Group, Zone, ZoneStatus};

/// A group and the zone it administers.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFixture {
    pub group: Group,
    pub zone: Zone,
}

/// Create `group`, then `zone` administered by it, and wait until the zone is Active.
///
/// The zone's `admin_group_id` is overwritten with the created group's id.
///
/// # Errors
///
/// Backend errors from either create, or [`CommandError::PollTimeout`] when
/// the zone never becomes Active. A group created before a failure is left
/// in place.
pub async fn setup_group_and_zone<A>(
    api: &A,
    settings: &PollSettings,
    group: &Group,
    zone: &Zone,
) -> Result<ZoneFixture, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let group = api.create_group(group).await?;
    debug!(group_name = %group.name, group_id = %group.id, "Created admin group");

    let request = Zone {
        admin_group_id: group.id.clone(),
        ..zone.clone()
    };
    let accepted = api.create_zone(&request).await?;
    wait_for_zone_active(api, &accepted.zone.id, settings).await?;
    settle(settings, "zone creation").await;

    info!(zone_name = %accepted.zone.name, zone_id = %accepted.zone.id, "Zone fixture ready");
    Ok(ZoneFixture {
        group,
        zone: Zone {
            status: Some(ZoneStatus::Active),
            ..accepted.zone
        },
    })
}

/// Delete a zone and then its admin group.
///
/// A zone that is already gone is skipped; the group is still deleted. The
/// settle delay runs between the two deletions because the backend keeps
/// the group linked to the zone briefly after the zone stops existing.
///
/// # Errors
///
/// Backend errors other than 404, or [`CommandError::PollTimeout`].
pub async fn cleanup_zone_and_admin_group<A>(
    api: &A,
    settings: &PollSettings,
    zone_id: &str,
    group_id: &str,
) -> Result<(), CommandError>
where
    A: ZoneApi + ?Sized,
{
    match api.delete_zone(zone_id).await.map_err(CommandError::from) {
        Ok(_) => wait_for_zone_absent(api, zone_id, settings).await?,
        Err(e) if e.is_not_found() => {
            debug!(zone_id = %zone_id, "Zone already gone, skipping zone deletion");
        }
        Err(e) => return Err(e),
    }

    settle(settings, "admin group release").await;

    match api.delete_group(group_id).await.map_err(CommandError::from) {
        Ok(_) => wait_for_group_absent(api, group_id, settings).await?,
        Err(e) if e.is_not_found() => {
            debug!(group_id = %group_id, "Group already gone, skipping group deletion");
        }
        Err(e) => return Err(e),
    }

    info!(zone_id = %zone_id, group_id = %group_id, "Zone and admin group removed");
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod lifecycle_tests;
