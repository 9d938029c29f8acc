// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone subcommands: `zones`, `zone`, `zone-create`, `zone-delete`.

use tracing::{debug, info};

use crate::api::ZoneApi;
use crate::cli::{ZoneArgs, ZoneCreateArgs};
use crate::connection::validate_connections;
use crate::errors::CommandError;
use crate::output::CommandOutput;
use crate::poller::{settle, wait_for_zone_absent, wait_for_zone_active, PollSettings};
use crate::resolver::{resolve_group_id, resolve_zone, GroupSelector, ZoneSelector};
use crate::types::{Zone, ZoneStatus};

/// List every zone visible to the caller.
///
/// # Errors
///
/// Backend errors, verbatim.
pub async fn list_zones<A>(api: &A) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let zones = api.list_zones().await?;
    debug!(count = zones.len(), "Listed zones");
    Ok(CommandOutput::Zones(zones))
}

/// Show one zone selected by `--zone-name` or `--zone-id`.
///
/// # Errors
///
/// Usage error for both/neither flags, not-found, or a backend error.
pub async fn show_zone<A>(api: &A, args: &ZoneArgs) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let selector = ZoneSelector::from_flags(args.zone_name.as_deref(), args.zone_id.as_deref())?;
    let zone = resolve_zone(api, &selector).await?;
    Ok(CommandOutput::Zone(zone))
}

/// Create a zone and wait until the backend reports it Active.
///
/// Flag validation happens before the first API call, so a partial
/// connection triple or a bad admin group selector costs no request.
///
/// # Arguments
///
/// * `api` - Backend to create the zone on
/// * `settings` - Bounds for the Active poll and the settle delay
/// * `args` - Parsed `zone-create` flags
///
/// # Errors
///
/// * [`CommandError::Validation`] for a partial zone or transfer connection
/// * [`CommandError::Usage`] when both or neither admin group flags are given
/// * [`CommandError::NotFound`] when `--admin-group-name` matches no group
/// * [`CommandError::Backend`] when the backend rejects the zone
/// * [`CommandError::PollTimeout`] when the zone never becomes Active
pub async fn create_zone<A>(
    api: &A,
    settings: &PollSettings,
    args: &ZoneCreateArgs,
) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let (connection, transfer_connection) =
        validate_connections(&args.zone_connection(), &args.transfer_connection())?;
    let admin_group = GroupSelector::from_flags(
        args.admin_group_name.as_deref(),
        args.admin_group_id.as_deref(),
        "--admin-group-name",
        "--admin-group-id",
    )?;

    let admin_group_id = resolve_group_id(api, &admin_group).await?;

    let request = Zone {
        name: args.name.clone(),
        email: args.email.clone(),
        admin_group_id,
        connection,
        transfer_connection,
        ..Zone::default()
    };

    info!(zone_name = %request.name, admin_group_id = %request.admin_group_id, "Creating zone");
    let accepted = api.create_zone(&request).await?;
    let zone_id = accepted.zone.id.clone();
    debug!(
        zone_name = %accepted.zone.name,
        zone_id = %zone_id,
        change_status = %accepted.status,
        "Zone creation accepted"
    );

    wait_for_zone_active(api, &zone_id, settings).await?;
    settle(settings, "zone creation").await;

    info!(zone_name = %accepted.zone.name, zone_id = %zone_id, "Zone is Active");
    Ok(CommandOutput::ZoneChange {
        message: format!("Created zone {}.", accepted.zone.name),
        zone: Zone {
            status: Some(ZoneStatus::Active),
            ..accepted.zone
        },
    })
}

/// Delete a zone and wait until it no longer exists.
///
/// # Errors
///
/// Usage error for both/neither flags, not-found, a backend error, or
/// [`CommandError::PollTimeout`] when the zone keeps existing.
pub async fn delete_zone<A>(
    api: &A,
    settings: &PollSettings,
    args: &ZoneArgs,
) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let selector = ZoneSelector::from_flags(args.zone_name.as_deref(), args.zone_id.as_deref())?;
    let zone = resolve_zone(api, &selector).await?;

    info!(zone_name = %zone.name, zone_id = %zone.id, "Deleting zone");
    let accepted = api.delete_zone(&zone.id).await?;
    wait_for_zone_absent(api, &zone.id, settings).await?;

    info!(zone_name = %zone.name, zone_id = %zone.id, "Zone deleted");
    Ok(CommandOutput::ZoneChange {
        message: format!("Deleted zone {}.", zone.name),
        zone: accepted.zone,
    })
}
