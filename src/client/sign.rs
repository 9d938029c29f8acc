// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! AWS Signature Version 4 request signing.
//!
//! VinylDNS authenticates API calls with SigV4 using the service name
//! `VinylDNS`. The signed header set is fixed to `content-type;host;x-amz-date`,
//! which are exactly the headers [`super::VinylClient`] sends.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use url::Url;

use crate::constants::{CONTENT_TYPE_JSON, SIGNING_ALGORITHM, SIGNING_REGION, SIGNING_SERVICE};

type HmacSha256 = Hmac<Sha256>;

/// Headers listed in the signature, in canonical order
pub(crate) const SIGNED_HEADERS: &str = "content-type;host;x-amz-date";

/// Header values produced by signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Value for the `Authorization` header
    pub authorization: String,
    /// Value for the `X-Amz-Date` header
    pub amz_date: String,
}

/// Signs requests with an access/secret key pair.
#[derive(Clone)]
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Sign one request.
    ///
    /// `url` must be the exact URL sent, `body` the exact bytes sent (empty for
    /// requests without a body) and `now` the time placed in `X-Amz-Date`.
    #[must_use]
    pub fn sign(&self, method: &str, url: &Url, body: &[u8], now: DateTime<Utc>) -> Signature {
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date_stamp = now.format("%Y%m%d").to_string();

        // 1. Canonical request
        let canonical_headers = format!(
            "content-type:{CONTENT_TYPE_JSON}\nhost:{}\nx-amz-date:{amz_date}\n",
            host_header(url)
        );
        let hashed_payload = hex::encode(Sha256::digest(body));
        let canonical_request = format!(
            "{method}\n{}\n{}\n{canonical_headers}\n{SIGNED_HEADERS}\n{hashed_payload}",
            canonical_uri(url),
            canonical_query(url)
        );

        // 2. String to sign
        let credential_scope =
            format!("{date_stamp}/{SIGNING_REGION}/{SIGNING_SERVICE}/aws4_request");
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!(
            "{SIGNING_ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_canonical_request}"
        );

        // 3. Signature
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_key).as_bytes(),
            date_stamp.as_bytes(),
        );
        let k_region = hmac_sha256(&k_date, SIGNING_REGION.as_bytes());
        let k_service = hmac_sha256(&k_region, SIGNING_SERVICE.as_bytes());
        let k_signing = hmac_sha256(&k_service, b"aws4_request");
        let signature = hex::encode(hmac_sha256(&k_signing, string_to_sign.as_bytes()));

        // 4. Authorization header
        Signature {
            authorization: format!(
                "{SIGNING_ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
                self.access_key
            ),
            amz_date,
        }
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// `host[:port]`, with the port only when it is not the scheme default.
fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Path with every segment encoded again on top of the URL's own escaping,
/// as SigV4 requires for services other than S3.
fn canonical_uri(url: &Url) -> String {
    match url.path() {
        "" => "/".to_string(),
        path => path.split('/').map(uri_encode).collect::<Vec<_>>().join("/"),
    }
}

/// Query pairs sorted by key then value, each RFC 3986 encoded.
fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (uri_encode(&k), uri_encode(&v)))
        .collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub(crate) fn uri_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
#[path = "sign_tests.rs"]
mod sign_tests;
