// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! In-memory VinylDNS backend for unit tests.
//!
//! Mirrors the backend's eventual consistency on the Tokio clock: a created
//! zone only becomes readable after `activation_delay`, a deleted zone stays
//! readable for `deletion_delay`, and its admin group stays linked to it for a
//! further `admin_link_lag`. Tests run with a paused clock so these delays cost
//! nothing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

use crate::api::ZoneApi;
use crate::errors::ApiError;
use crate::types::{Group, User, Zone, ZoneStatus, ZoneUpdateResponse};

struct StoredZone {
    zone: Zone,
    active_at: Instant,
    gone_at: Option<Instant>,
}

impl StoredZone {
    fn visible(&self, now: Instant) -> bool {
        now >= self.active_at && self.gone_at.is_none_or(|gone| now < gone)
    }

    fn links_group(&self, group_id: &str, now: Instant, lag: Duration) -> bool {
        self.zone.admin_group_id == group_id && self.gone_at.is_none_or(|gone| now < gone + lag)
    }
}

#[derive(Default)]
struct State {
    zones: Vec<StoredZone>,
    groups: Vec<Group>,
    next_id: u32,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, ApiError>,
}

/// Fake [`ZoneApi`] with configurable propagation delays.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
    activation_delay: Duration,
    deletion_delay: Duration,
    admin_link_lag: Duration,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_activation_delay(mut self, delay: Duration) -> Self {
        self.activation_delay = delay;
        self
    }

    pub fn with_deletion_delay(mut self, delay: Duration) -> Self {
        self.deletion_delay = delay;
        self
    }

    pub fn with_admin_link_lag(mut self, lag: Duration) -> Self {
        self.admin_link_lag = lag;
        self
    }

    /// Make every call to `operation` fail with `err`.
    pub fn fail_on(&self, operation: &'static str, err: ApiError) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation, err);
    }

    /// Operation names called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Insert a readable zone, bypassing propagation delays. A zone without a
    /// status is stored as `Active`.
    pub fn seed_zone(&self, zone: Zone) {
        let mut state = self.state.lock().unwrap();
        state.zones.push(StoredZone {
            zone: Zone {
                status: zone.status.or(Some(ZoneStatus::Active)),
                ..zone
            },
            active_at: Instant::now(),
            gone_at: None,
        });
    }

    /// Insert a group as is.
    pub fn seed_group(&self, group: Group) {
        self.state.lock().unwrap().groups.push(group);
    }

    /// Number of zones not yet fully deleted, visible or not.
    pub fn stored_zone_count(&self) -> usize {
        let now = Instant::now();
        self.state
            .lock()
            .unwrap()
            .zones
            .iter()
            .filter(|z| z.gone_at.is_none_or(|gone| now < gone))
            .count()
    }

    fn enter(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, State>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(operation);
        if let Some(err) = state.failures.get(operation).cloned() {
            return Err(err);
        }
        Ok(state)
    }

    fn not_found(kind: &str, id: &str) -> ApiError {
        ApiError::NotFound {
            url: format!("fake://{kind}s/{id}"),
            message: format!("{kind} with id {id} does not exist"),
        }
    }

    fn bad_request(message: String) -> ApiError {
        ApiError::Http {
            status: 400,
            url: "fake://".to_string(),
            message,
        }
    }
}

/// Group fixture with a single admin/member user `ok`.
pub fn make_group(name: &str) -> Group {
    Group {
        name: name.to_string(),
        description: Some("description".to_string()),
        email: "email@email.com".to_string(),
        admins: vec![User::with_id("ok")],
        members: vec![User::with_id("ok")],
        ..Group::default()
    }
}

/// Zone fixture owned by `admin_group_id`.
pub fn make_zone(id: &str, name: &str, admin_group_id: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        email: "email@email.com".to_string(),
        admin_group_id: admin_group_id.to_string(),
        ..Zone::default()
    }
}

#[async_trait]
impl ZoneApi for FakeBackend {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        let state = self.enter("list_zones")?;
        let now = Instant::now();
        Ok(state
            .zones
            .iter()
            .filter(|z| z.visible(now))
            .map(|z| z.zone.clone())
            .collect())
    }

    async fn get_zone(&self, id: &str) -> Result<Zone, ApiError> {
        let state = self.enter("get_zone")?;
        let now = Instant::now();
        state
            .zones
            .iter()
            .find(|z| z.zone.id == id && z.visible(now))
            .map(|z| z.zone.clone())
            .ok_or_else(|| Self::not_found("zone", id))
    }

    async fn create_zone(&self, zone: &Zone) -> Result<ZoneUpdateResponse, ApiError> {
        let mut state = self.enter("create_zone")?;
        let now = Instant::now();

        if !state.groups.iter().any(|g| g.id == zone.admin_group_id) {
            return Err(Self::bad_request(format!(
                "Admin group with ID {} does not exist",
                zone.admin_group_id
            )));
        }
        if state
            .zones
            .iter()
            .any(|z| z.zone.name == zone.name && z.gone_at.is_none())
        {
            return Err(ApiError::Http {
                status: 409,
                url: "fake://zones".to_string(),
                message: format!("Zone with name {} already exists", zone.name),
            });
        }

        state.next_id += 1;
        let n = state.next_id;
        let created = Zone {
            id: format!("{n:08x}-0000-4000-8000-{n:012x}"),
            status: Some(ZoneStatus::Active),
            ..zone.clone()
        };
        state.zones.push(StoredZone {
            zone: created.clone(),
            active_at: now + self.activation_delay,
            gone_at: None,
        });

        Ok(ZoneUpdateResponse {
            zone: Zone {
                status: Some(ZoneStatus::PendingUpdate),
                ..created
            },
            change_type: "Create".to_string(),
            status: "Pending".to_string(),
            user_id: "ok".to_string(),
            id: format!("change-{n}"),
            created: None,
        })
    }

    async fn delete_zone(&self, id: &str) -> Result<ZoneUpdateResponse, ApiError> {
        let mut state = self.enter("delete_zone")?;
        let now = Instant::now();
        let deletion_delay = self.deletion_delay;

        let stored = state
            .zones
            .iter_mut()
            .find(|z| z.zone.id == id && z.visible(now))
            .ok_or_else(|| Self::not_found("zone", id))?;
        stored.gone_at = Some(now + deletion_delay);

        Ok(ZoneUpdateResponse {
            zone: Zone {
                status: Some(ZoneStatus::PendingDelete),
                ..stored.zone.clone()
            },
            change_type: "Delete".to_string(),
            status: "Pending".to_string(),
            user_id: "ok".to_string(),
            id: format!("delete-{id}"),
            created: None,
        })
    }

    async fn zone_exists(&self, id: &str) -> Result<bool, ApiError> {
        let state = self.enter("zone_exists")?;
        let now = Instant::now();
        Ok(state
            .zones
            .iter()
            .any(|z| z.zone.id == id && z.visible(now)))
    }

    async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        let state = self.enter("list_groups")?;
        Ok(state.groups.clone())
    }

    async fn get_group(&self, id: &str) -> Result<Group, ApiError> {
        let state = self.enter("get_group")?;
        state
            .groups
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("group", id))
    }

    async fn create_group(&self, group: &Group) -> Result<Group, ApiError> {
        let mut state = self.enter("create_group")?;
        if state.groups.iter().any(|g| g.name == group.name) {
            return Err(ApiError::Http {
                status: 409,
                url: "fake://groups".to_string(),
                message: format!("Group with name {} already exists", group.name),
            });
        }
        state.next_id += 1;
        let created = Group {
            id: format!("group-{}", state.next_id),
            status: Some("Active".to_string()),
            ..group.clone()
        };
        state.groups.push(created.clone());
        Ok(created)
    }

    async fn delete_group(&self, id: &str) -> Result<Group, ApiError> {
        let mut state = self.enter("delete_group")?;
        let now = Instant::now();
        let lag = self.admin_link_lag;

        if state.zones.iter().any(|z| z.links_group(id, now, lag)) {
            return Err(Self::bad_request(format!(
                "{id} is the admin of a zone. Cannot delete. Please transfer the ownership to another group before deleting."
            )));
        }

        let index = state
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| Self::not_found("group", id))?;
        Ok(state.groups.remove(index))
    }
}
