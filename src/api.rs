// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! The zone/group management API consumed by the command layer.
//!
//! Command handlers, the resolver and the poller only see this trait. The
//! HTTP implementation lives in [`crate::client`]; tests substitute an
//! in-memory backend.

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::types::{Group, Zone, ZoneUpdateResponse};

/// Operations offered by the VinylDNS backend.
///
/// Mutations are accepted before they take effect: a zone returned by
/// [`ZoneApi::create_zone`] may not be readable yet, and a deleted zone may
/// still be reported by [`ZoneApi::zone_exists`] for a while.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// All zones visible to the caller, in backend order.
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError>;

    /// Fetch one zone by id. A missing zone is [`ApiError::NotFound`].
    async fn get_zone(&self, id: &str) -> Result<Zone, ApiError>;

    /// Submit a zone for creation.
    async fn create_zone(&self, zone: &Zone) -> Result<ZoneUpdateResponse, ApiError>;

    /// Submit a zone for deletion.
    async fn delete_zone(&self, id: &str) -> Result<ZoneUpdateResponse, ApiError>;

    /// Whether the zone is currently readable.
    async fn zone_exists(&self, id: &str) -> Result<bool, ApiError>;

    /// All groups visible to the caller.
    async fn list_groups(&self) -> Result<Vec<Group>, ApiError>;

    /// Fetch one group by id. A missing group is [`ApiError::NotFound`].
    async fn get_group(&self, id: &str) -> Result<Group, ApiError>;

    async fn create_group(&self, group: &Group) -> Result<Group, ApiError>;

    /// Delete a group. The backend refuses while the group still administers a zone.
    async fn delete_group(&self, id: &str) -> Result<Group, ApiError>;
}
