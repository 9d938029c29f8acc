// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Group subcommands: `groups`, `group`, `group-create`, `group-delete`.

use tracing::{debug, info};

use crate::api::ZoneApi;
use crate::cli::{GroupArgs, GroupCreateArgs};
use crate::errors::CommandError;
use crate::output::CommandOutput;
use crate::poller::{wait_for_group_absent, PollSettings};
use crate::resolver::{resolve_group, GroupSelector};
use crate::types::{Group, User};

/// List every group visible to the caller.
///
/// # Errors
///
/// Backend errors, verbatim.
pub async fn list_groups<A>(api: &A) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let groups = api.list_groups().await?;
    debug!(count = groups.len(), "Listed groups");
    Ok(CommandOutput::Groups(groups))
}

fn selector(args: &GroupArgs) -> Result<GroupSelector, CommandError> {
    GroupSelector::from_flags(
        args.group_name.as_deref(),
        args.group_id.as_deref(),
        "--group-name",
        "--group-id",
    )
}

/// Show one group selected by `--group-name` or `--group-id`.
///
/// # Errors
///
/// Usage error for both/neither flags, not-found, or a backend error.
pub async fn show_group<A>(api: &A, args: &GroupArgs) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let group = resolve_group(api, &selector(args)?).await?;
    Ok(CommandOutput::Group(group))
}

/// Build the group to submit: admins are always members too.
///
/// # Errors
///
/// [`CommandError::Validation`] when no admin id is given.
pub fn group_request(args: &GroupCreateArgs) -> Result<Group, CommandError> {
    let admin_ids: Vec<&String> = args.admin_ids.iter().filter(|id| !id.is_empty()).collect();
    if admin_ids.is_empty() {
        return Err(CommandError::Validation {
            message: "group requires at least one '--admin-id'".to_string(),
            missing: vec!["--admin-id".to_string()],
        });
    }

    let mut members: Vec<User> = Vec::new();
    for id in args.member_ids.iter().chain(admin_ids.iter().copied()) {
        if !id.is_empty() && !members.iter().any(|m| m.id == *id) {
            members.push(User::with_id(id.as_str()));
        }
    }

    let mut admins: Vec<User> = Vec::new();
    for id in admin_ids {
        if !admins.iter().any(|a| a.id == *id) {
            admins.push(User::with_id(id.as_str()));
        }
    }

    Ok(Group {
        name: args.name.clone(),
        email: args.email.clone(),
        description: args.description.clone().filter(|d| !d.is_empty()),
        admins,
        members,
        ..Group::default()
    })
}

/// Create a group.
///
/// # Errors
///
/// [`CommandError::Validation`] without an admin, or the backend's error.
pub async fn create_group<A>(api: &A, args: &GroupCreateArgs) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let request = group_request(args)?;

    info!(group_name = %request.name, admins = request.admins.len(), "Creating group");
    let group = api.create_group(&request).await?;
    debug!(group_name = %group.name, group_id = %group.id, "Group created");

    Ok(CommandOutput::GroupChange {
        message: format!("Created group {}.", group.name),
        group,
    })
}

/// Delete a group and wait until it can no longer be read.
///
/// The backend refuses while the group still administers a zone; that
/// refusal is reported verbatim.
///
/// # Errors
///
/// Usage error for both/neither flags, not-found, a backend error, or
/// [`CommandError::PollTimeout`].
pub async fn delete_group<A>(
    api: &A,
    settings: &PollSettings,
    args: &GroupArgs,
) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    let group = resolve_group(api, &selector(args)?).await?;

    info!(group_name = %group.name, group_id = %group.id, "Deleting group");
    let deleted = api.delete_group(&group.id).await?;
    wait_for_group_absent(api, &group.id, settings).await?;

    Ok(CommandOutput::GroupChange {
        message: format!("Deleted group {}.", group.name),
        group: deleted,
    })
}
