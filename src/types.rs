// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Wire types for the VinylDNS zone and group API.
//!
//! Field names follow the API's camelCase JSON. Fields the backend assigns
//! (ids, timestamps, status) are optional or defaulted so the same types can be
//! used for create requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a zone as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneStatus {
    Active,
    Deleted,
    PendingUpdate,
    PendingDelete,
    Syncing,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::Deleted => "Deleted",
            Self::PendingUpdate => "PendingUpdate",
            Self::PendingDelete => "PendingDelete",
            Self::Syncing => "Syncing",
            Self::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Credentials for reaching a zone's primary name server.
///
/// Always fully populated; a partial connection is rejected before it can be
/// built (see [`crate::connection`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConnection {
    /// Connection name (the CLI uses the key name)
    pub name: String,
    /// TSIG key name
    pub key_name: String,
    /// TSIG key secret
    pub key: String,
    /// Primary server address
    pub primary_server: String,
}

/// A DNS zone managed by VinylDNS.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Backend-assigned identifier; empty on create requests
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Fully-qualified zone name with trailing dot
    pub name: String,
    /// Administrative contact
    pub email: String,
    /// Identifier of the owning group
    pub admin_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<ZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_connection: Option<ZoneConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ZoneStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<String>,
}

impl Zone {
    /// Returns true once the backend reports the zone as `Active`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(ZoneStatus::Active)
    }

    /// Status as shown in tables; blank when the backend did not send one.
    #[must_use]
    pub fn status_label(&self) -> String {
        self.status.map(|s| s.to_string()).unwrap_or_default()
    }
}

/// Backend acknowledgement of an accepted zone change.
///
/// The change is applied asynchronously; the embedded zone reflects the
/// requested state, not necessarily what a subsequent read returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneUpdateResponse {
    pub zone: Zone,
    #[serde(default)]
    pub change_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Envelope returned by `GET /zones/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub zone: Zone,
}

/// One page of `GET /zones`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonesPage {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

/// A user reference inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_name: None,
        }
    }
}

/// An access-control group administering zones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Backend-assigned identifier; empty on create requests
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub admins: Vec<User>,
    #[serde(default)]
    pub members: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// One page of `GET /groups`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsPage {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
