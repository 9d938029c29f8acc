// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Tests for the HTTP client (URL building, pagination, error mapping, signing headers).

#[cfg(test)]
mod tests {
    use crate::api::ZoneApi;
    use crate::client::{build_api_url, ClientConfig, VinylClient};
    use crate::errors::ApiError;
    use crate::types::{Group, User, Zone};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> VinylClient {
        VinylClient::new(ClientConfig {
            host: server.uri(),
            access_key: Some("okAccessKey".to_string()),
            secret_key: Some("okSecretKey".to_string()),
        })
        .unwrap()
    }

    fn zone_json(id: &str, name: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "email": "email@email.com",
            "adminGroupId": "group-1",
            "status": status
        })
    }

    // =====================================================
    // URL Building Tests
    // =====================================================

    #[test]
    fn test_build_api_url_without_scheme() {
        assert_eq!(build_api_url("localhost:9000"), "http://localhost:9000");
    }

    #[test]
    fn test_build_api_url_with_https() {
        assert_eq!(
            build_api_url("https://vinyldns.example.com"),
            "https://vinyldns.example.com"
        );
    }

    #[test]
    fn test_build_api_url_trailing_slashes() {
        assert_eq!(
            build_api_url("http://localhost:9000///"),
            "http://localhost:9000"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments_and_keeps_prefix() {
        let client = VinylClient::new(ClientConfig {
            host: "http://localhost:9000/api/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let url = client
            .endpoint(&["zones", "a/b c"], &[("maxItems", "100".to_string())])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/zones/a%2Fb%20c?maxItems=100"
        );
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let result = VinylClient::new(ClientConfig {
            host: "http://[not-an-ip".to_string(),
            ..ClientConfig::default()
        });

        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }

    // =====================================================
    // Zone Operations
    // =====================================================

    #[tokio::test]
    async fn test_list_zones_follows_next_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones"))
            .and(query_param("startFrom", "page-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "zones": [zone_json("z2", "two.", "Active")],
                "maxItems": 100
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/zones"))
            .and(query_param("maxItems", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "zones": [zone_json("z1", "one.", "Active")],
                "maxItems": 100,
                "nextId": "page-2"
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let zones = client_for(&server).list_zones().await.unwrap();

        let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["one.", "two."]);
    }

    #[tokio::test]
    async fn test_list_zones_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"zones": [], "maxItems": 100})),
            )
            .mount(&server)
            .await;

        let zones = client_for(&server).list_zones().await.unwrap();

        assert!(zones.is_empty());
    }

    #[tokio::test]
    async fn test_requests_are_signed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones/z1"))
            .and(header_exists("authorization"))
            .and(header_exists("x-amz-date"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"zone": zone_json("z1", "one.", "Active")})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let zone = client_for(&server).get_zone("z1").await.unwrap();

        assert_eq!(zone.name, "one.");
        assert!(zone.is_active());
    }

    #[tokio::test]
    async fn test_get_zone_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("Zone with id missing does not exist"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_zone("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Zone with id missing does not exist");
    }

    #[tokio::test]
    async fn test_zone_exists_maps_404_to_false() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/zones/here"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"zone": zone_json("here", "here.", "Active")})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);

        assert!(!client.zone_exists("gone").await.unwrap());
        assert!(client.zone_exists("here").await.unwrap());
    }

    #[tokio::test]
    async fn test_zone_exists_propagates_server_errors() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones/z1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).zone_exists("z1").await.unwrap_err();

        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn test_create_zone_posts_camel_case_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/zones"))
            .and(body_partial_json(json!({
                "name": "vinyldns.",
                "adminGroupId": "group-1"
            })))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({
                "zone": zone_json("new-id", "vinyldns.", "Active"),
                "changeType": "Create",
                "status": "Pending",
                "userId": "ok",
                "id": "change-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = Zone {
            name: "vinyldns.".to_string(),
            email: "email@email.com".to_string(),
            admin_group_id: "group-1".to_string(),
            ..Zone::default()
        };
        let response = client_for(&server).create_zone(&request).await.unwrap();

        assert_eq!(response.zone.id, "new-id");
        assert_eq!(response.change_type, "Create");
    }

    #[tokio::test]
    async fn test_create_zone_conflict_is_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/zones"))
            .respond_with(
                ResponseTemplate::new(409).set_body_string("Zone with name vinyldns. already exists"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_zone(&Zone::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Zone with name vinyldns. already exists");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/zones/z1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_zone("z1").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let client = VinylClient::new(ClientConfig {
            host: "http://127.0.0.1:9".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let err = client.list_zones().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport { .. }));
    }

    // =====================================================
    // Group Operations
    // =====================================================

    #[tokio::test]
    async fn test_group_lifecycle_calls() {
        let server = MockServer::start().await;
        let group_body = json!({
            "id": "g1",
            "name": "zones-test-group",
            "email": "email@email.com",
            "admins": [{"id": "ok"}],
            "members": [{"id": "ok"}]
        });

        Mock::given(method("POST"))
            .and(path("/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(group_body.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/groups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [group_body.clone()], "maxItems": 100})),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/groups/g1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(group_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let created = client
            .create_group(&Group {
                name: "zones-test-group".to_string(),
                email: "email@email.com".to_string(),
                admins: vec![User::with_id("ok")],
                members: vec![User::with_id("ok")],
                ..Group::default()
            })
            .await
            .unwrap();
        let groups = client.list_groups().await.unwrap();
        let deleted = client.delete_group(&created.id).await.unwrap();

        assert_eq!(created.id, "g1");
        assert_eq!(groups.len(), 1);
        assert_eq!(deleted.name, "zones-test-group");
    }
}
