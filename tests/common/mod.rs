// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for binary-level tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ZONE_ID: &str = "4c2b3e4f-1a2b-4c3d-8e9f-0a1b2c3d4e5f";
pub const GROUP_ID: &str = "9a8b7c6d-1a2b-4c3d-8e9f-0a1b2c3d4e5f";

/// The `vinyldns` binary pointed at `host`, isolated from the caller's environment.
pub fn vinyldns(host: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vinyldns"));
    for var in [
        "VINYLDNS_OUTPUT",
        "VINYLDNS_POLL_TIMEOUT",
        "VINYLDNS_POLL_ATTEMPTS",
        "RUST_LOG",
        "RUST_LOG_FORMAT",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("VINYLDNS_HOST", host)
        .env("VINYLDNS_ACCESS_KEY", "okAccessKey")
        .env("VINYLDNS_SECRET_KEY", "okSecretKey")
        .env("VINYLDNS_SETTLE_DELAY", "0");
    cmd
}

/// A host nothing listens on; commands that reach the network fail fast.
pub fn unreachable_host() -> &'static str {
    "http://127.0.0.1:9"
}

pub fn zone_json(status: &str) -> Value {
    json!({
        "id": ZONE_ID,
        "name": "vinyldns.",
        "email": "admin@test.com",
        "adminGroupId": GROUP_ID,
        "status": status,
        "created": "2025-01-01T00:00:00Z",
        "shared": false
    })
}

pub fn group_json() -> Value {
    json!({
        "id": GROUP_ID,
        "name": "zones-test-group",
        "email": "email@email.com",
        "description": "description",
        "admins": [{ "id": "ok" }],
        "members": [{ "id": "ok" }],
        "status": "Active"
    })
}

/// Serve `GET /zones` with a single page.
pub async fn mount_zones(server: &MockServer, zones: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zones": zones,
            "maxItems": 100
        })))
        .mount(server)
        .await;
}

/// Serve `GET /groups` with a single page.
pub async fn mount_groups(server: &MockServer, groups: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": groups,
            "maxItems": 100
        })))
        .mount(server)
        .await;
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
