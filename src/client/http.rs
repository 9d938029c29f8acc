// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Request execution for [`VinylClient`].

use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::VinylClient;
use crate::constants::CONTENT_TYPE_JSON;
use crate::errors::ApiError;

impl VinylClient {
    /// Build the full URL for a path under the base URL.
    ///
    /// Segments are percent-encoded individually, so ids containing `/` or
    /// spaces cannot escape their segment.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Execute one API request and decode the JSON response.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `segments` - Path segments below the base URL (e.g. `["zones", id]`)
    /// * `query` - Query parameters
    /// * `body` - Optional JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for 404, [`ApiError::Http`] for other
    /// non-success statuses, [`ApiError::Transport`] if no response arrived and
    /// [`ApiError::Decode`] if the body is not the expected JSON.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments, query)?;

        let payload = match body {
            Some(data) => serde_json::to_vec(data).map_err(|e| ApiError::Decode {
                url: url.to_string(),
                reason: format!("failed to serialize request body: {e}"),
            })?,
            None => Vec::new(),
        };

        debug!(
            method = %method,
            url = %url,
            body_len = payload.len(),
            signed = self.signer.is_some(),
            "HTTP API request to VinylDNS"
        );

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        // Sign the exact URL and bytes that go on the wire
        if let Some(signer) = &self.signer {
            let signature = signer.sign(method.as_str(), &url, &payload, Utc::now());
            request = request
                .header("X-Amz-Date", signature.amz_date)
                .header(AUTHORIZATION, signature.authorization);
        }

        if !payload.is_empty() {
            request = request.body(payload);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            debug!(
                method = %method,
                url = %url,
                status = %status,
                error = %text,
                "HTTP API request failed"
            );
            return Err(ApiError::from_status(status, url.as_str(), text));
        }

        debug!(
            method = %method,
            url = %url,
            status = %status,
            response_len = text.len(),
            "HTTP API request successful"
        );

        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
