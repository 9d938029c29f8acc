// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! VinylDNS management via its HTTP API.
//!
//! [`VinylClient`] implements [`ZoneApi`] over `reqwest`. It handles:
//!
//! - Building endpoint URLs from the configured host
//! - Signing every request with SigV4 when credentials are configured
//! - Following `nextId` pagination so list calls return whole collections
//! - Mapping HTTP failures onto [`ApiError`], with 404 kept distinct
//!
//! Requests are never retried here. The only retry loop in the CLI is the
//! bounded existence check in [`crate::poller`].
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyldns_cli::api::ZoneApi;
//! use vinyldns_cli::client::{ClientConfig, VinylClient};
//!
//! # async fn example() -> Result<(), vinyldns_cli::errors::ApiError> {
//! let client = VinylClient::new(ClientConfig {
//!     host: "http://localhost:9000".to_string(),
//!     access_key: Some("okAccessKey".to_string()),
//!     secret_key: Some("okSecretKey".to_string()),
//! })?;
//!
//! for zone in client.list_zones().await? {
//!     println!("{} {}", zone.name, zone.id);
//! }
//! # Ok(())
//! # }
//! ```

mod http;
pub mod sign;

pub use sign::{RequestSigner, Signature};

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::api::ZoneApi;
use crate::constants::{HTTP_REQUEST_TIMEOUT_SECS, LIST_PAGE_SIZE, MAX_LIST_PAGES};
use crate::errors::ApiError;
use crate::types::{Group, GroupsPage, Zone, ZoneResponse, ZoneUpdateResponse, ZonesPage};

/// Connection settings for [`VinylClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API endpoint, with or without scheme (`localhost:9000` means `http://localhost:9000`)
    pub host: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

/// HTTP client for the VinylDNS API.
#[derive(Debug, Clone)]
pub struct VinylClient {
    /// HTTP client for API requests
    http: HttpClient,
    /// Base URL every path is appended to
    base_url: Url,
    /// Present only when both keys are configured
    signer: Option<RequestSigner>,
}

/// Build the API base URL from a host setting.
///
/// Converts `"vinyldns.example.com:9000"` to `<http://vinyldns.example.com:9000>`
/// and strips trailing slashes.
pub(crate) fn build_api_url(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

impl VinylClient {
    /// Create a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the host does not form a valid URL and
    /// [`ApiError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base = build_api_url(&config.host);
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("vinyldns-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport {
                url: base.clone(),
                reason: e.to_string(),
            })?;

        let signer = match (config.access_key, config.secret_key) {
            (Some(access), Some(secret)) if !access.is_empty() && !secret.is_empty() => {
                Some(RequestSigner::new(access, secret))
            }
            _ => {
                debug!("No VinylDNS credentials configured; requests will be unsigned");
                None
            }
        };

        Ok(Self {
            http,
            base_url,
            signer,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch every page of a list endpoint.
    async fn collect_pages<P>(&self, path: &str) -> Result<Vec<P::Item>, ApiError>
    where
        P: Page + DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut start_from: Option<String> = None;

        for page_number in 1..=MAX_LIST_PAGES {
            let mut query = vec![("maxItems", LIST_PAGE_SIZE.to_string())];
            if let Some(next) = start_from.take() {
                query.push(("startFrom", next));
            }

            let page: P = self
                .request(Method::GET, &[path], &query, None::<&()>)
                .await?;
            let (page_items, next_id) = page.into_parts();
            debug!(
                path = %path,
                page = page_number,
                items = page_items.len(),
                "Fetched list page"
            );
            items.extend(page_items);

            match next_id {
                Some(next) if !next.is_empty() => start_from = Some(next),
                _ => return Ok(items),
            }
        }

        warn!(
            path = %path,
            pages = MAX_LIST_PAGES,
            "Stopped following pagination after page limit"
        );
        Ok(items)
    }
}

/// A list response carrying one page of items and an optional continuation id.
trait Page {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

impl Page for ZonesPage {
    type Item = Zone;

    fn into_parts(self) -> (Vec<Zone>, Option<String>) {
        (self.zones, self.next_id)
    }
}

impl Page for GroupsPage {
    type Item = Group;

    fn into_parts(self) -> (Vec<Group>, Option<String>) {
        (self.groups, self.next_id)
    }
}

#[async_trait]
impl ZoneApi for VinylClient {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        self.collect_pages::<ZonesPage>("zones").await
    }

    async fn get_zone(&self, id: &str) -> Result<Zone, ApiError> {
        let response: ZoneResponse = self
            .request(Method::GET, &["zones", id], &[], None::<&()>)
            .await?;
        Ok(response.zone)
    }

    async fn create_zone(&self, zone: &Zone) -> Result<ZoneUpdateResponse, ApiError> {
        self.request(Method::POST, &["zones"], &[], Some(zone))
            .await
    }

    async fn delete_zone(&self, id: &str) -> Result<ZoneUpdateResponse, ApiError> {
        self.request(Method::DELETE, &["zones", id], &[], None::<&()>)
            .await
    }

    async fn zone_exists(&self, id: &str) -> Result<bool, ApiError> {
        match self.get_zone(id).await {
            Ok(_) => Ok(true),
            Err(ApiError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        self.collect_pages::<GroupsPage>("groups").await
    }

    async fn get_group(&self, id: &str) -> Result<Group, ApiError> {
        self.request(Method::GET, &["groups", id], &[], None::<&()>)
            .await
    }

    async fn create_group(&self, group: &Group) -> Result<Group, ApiError> {
        self.request(Method::POST, &["groups"], &[], Some(group))
            .await
    }

    async fn delete_group(&self, id: &str) -> Result<Group, ApiError> {
        self.request(Method::DELETE, &["groups", id], &[], None::<&()>)
            .await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
