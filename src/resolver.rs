// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Resolution of user-supplied zone and group references.
//!
//! Commands accept either a name or an id. Ids are fetched directly; names are
//! matched exactly (case-sensitive) against the full collection, since the API
//! has no name-indexed lookup. The scan is linear in the number of zones or
//! groups visible to the caller.

use tracing::debug;

use crate::api::ZoneApi;
use crate::errors::{ApiError, CommandError};
use crate::types::{Group, Zone};

/// How the user identified a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneSelector {
    Name(String),
    Id(String),
}

/// How the user identified a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelector {
    Name(String),
    Id(String),
}

/// Pick exactly one of two mutually exclusive flags.
///
/// Empty strings count as absent.
fn exactly_one(
    name: Option<&str>,
    id: Option<&str>,
    name_flag: &str,
    id_flag: &str,
) -> Result<Result<String, String>, CommandError> {
    let name = name.filter(|v| !v.is_empty());
    let id = id.filter(|v| !v.is_empty());

    match (name, id) {
        (Some(name), None) => Ok(Ok(name.to_string())),
        (None, Some(id)) => Ok(Err(id.to_string())),
        (Some(_), Some(_)) => Err(CommandError::Usage(format!(
            "'{name_flag}' and '{id_flag}' are mutually exclusive; pass only one"
        ))),
        (None, None) => Err(CommandError::Usage(format!(
            "either '{name_flag}' or '{id_flag}' is required"
        ))),
    }
}

impl ZoneSelector {
    /// Build a selector from `--zone-name` / `--zone-id`.
    ///
    /// # Errors
    ///
    /// [`CommandError::Usage`] if both or neither are supplied.
    pub fn from_flags(name: Option<&str>, id: Option<&str>) -> Result<Self, CommandError> {
        Ok(match exactly_one(name, id, "--zone-name", "--zone-id")? {
            Ok(name) => Self::Name(name),
            Err(id) => Self::Id(id),
        })
    }
}

impl GroupSelector {
    /// Build a selector from a pair of name/id flags.
    ///
    /// The flag names only shape the usage error, so the same selector serves
    /// `--group-name`/`--group-id` and `--admin-group-name`/`--admin-group-id`.
    ///
    /// # Errors
    ///
    /// [`CommandError::Usage`] if both or neither are supplied.
    pub fn from_flags(
        name: Option<&str>,
        id: Option<&str>,
        name_flag: &str,
        id_flag: &str,
    ) -> Result<Self, CommandError> {
        Ok(match exactly_one(name, id, name_flag, id_flag)? {
            Ok(name) => Self::Name(name),
            Err(id) => Self::Id(id),
        })
    }
}

fn not_found_or(kind: &'static str, key: &str, err: ApiError) -> CommandError {
    if err.is_not_found() {
        CommandError::NotFound {
            kind,
            key: key.to_string(),
        }
    } else {
        CommandError::Backend(err)
    }
}

/// Resolve a selector to exactly one zone.
///
/// # Errors
///
/// [`CommandError::NotFound`] when no zone matches, [`CommandError::Backend`]
/// for any other API failure.
pub async fn resolve_zone<A>(api: &A, selector: &ZoneSelector) -> Result<Zone, CommandError>
where
    A: ZoneApi + ?Sized,
{
    match selector {
        ZoneSelector::Id(id) => api
            .get_zone(id)
            .await
            .map_err(|e| not_found_or("zone", id, e)),
        ZoneSelector::Name(name) => {
            let zones = api.list_zones().await?;
            debug!(zone_name = %name, candidates = zones.len(), "Resolving zone by name");
            zones
                .into_iter()
                .find(|z| z.name == *name)
                .ok_or_else(|| CommandError::NotFound {
                    kind: "zone",
                    key: name.clone(),
                })
        }
    }
}

/// Resolve a selector to exactly one group.
///
/// # Errors
///
/// [`CommandError::NotFound`] when no group matches, [`CommandError::Backend`]
/// for any other API failure.
pub async fn resolve_group<A>(api: &A, selector: &GroupSelector) -> Result<Group, CommandError>
where
    A: ZoneApi + ?Sized,
{
    match selector {
        GroupSelector::Id(id) => api
            .get_group(id)
            .await
            .map_err(|e| not_found_or("group", id, e)),
        GroupSelector::Name(name) => {
            let groups = api.list_groups().await?;
            debug!(group_name = %name, candidates = groups.len(), "Resolving group by name");
            groups
                .into_iter()
                .find(|g| g.name == *name)
                .ok_or_else(|| CommandError::NotFound {
                    kind: "group",
                    key: name.clone(),
                })
        }
    }
}

/// Resolve an admin group reference to its id.
///
/// An id is used as given (the backend validates it on create); a name costs
/// one group listing.
///
/// # Errors
///
/// As [`resolve_group`].
pub async fn resolve_group_id<A>(api: &A, selector: &GroupSelector) -> Result<String, CommandError>
where
    A: ZoneApi + ?Sized,
{
    match selector {
        GroupSelector::Id(id) => Ok(id.clone()),
        GroupSelector::Name(_) => Ok(resolve_group(api, selector).await?.id),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
