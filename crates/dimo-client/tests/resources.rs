//! Integration tests for the resource method groups

use dimo_client::testing::{MockPlatform, MockResponse, TestServer, TEST_NFT_ADDRESS};
use dimo_client::DimoError;
use pretty_assertions::assert_eq;
use serde_json::json;

fn ok(method: &str, path: &str) -> MockPlatform {
    MockPlatform::new().on(method, path, MockResponse::json(200, json!({"ok": true})))
}

// =============================================================================
// Device definitions
// =============================================================================

#[tokio::test]
async fn test_device_definition_by_id() {
    let platform = MockPlatform::new().on(
        "GET",
        "/device-definitions/123",
        MockResponse::json(200, json!({"deviceDefinitionId": "123", "make": "Ford"})),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let def = server
        .client
        .device_definitions()
        .get_by_id("123")
        .await
        .unwrap();
    assert_eq!(def, Some(json!({"deviceDefinitionId": "123", "make": "Ford"})));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/device-definitions/123");
    assert!(requests[0].header("authorization").is_none());
}

#[tokio::test]
async fn test_device_definition_by_make_model_year() {
    let server = TestServer::start_mock(ok("GET", "/device-definitions"))
        .await
        .unwrap();

    server
        .client
        .device_definitions()
        .get_by_mmy("Ford", "F-150", 2021)
        .await
        .unwrap();

    assert_eq!(
        server.requests()[0].query_pairs(),
        vec![
            ("make".to_string(), "Ford".to_string()),
            ("model".to_string(), "F-150".to_string()),
            ("year".to_string(), "2021".to_string()),
        ]
    );
}

// =============================================================================
// Vehicle commands
// =============================================================================

#[tokio::test]
async fn test_lock_doors() {
    let server = TestServer::start_mock(ok("POST", "/v1/vehicle/42/commands/doors/lock"))
        .await
        .unwrap();

    let result = server.client.devices().lock_doors("tok", "42").await.unwrap();
    assert_eq!(result, Some(json!({"ok": true})));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/v1/vehicle/42/commands/doors/lock");
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_commands_hit_their_paths() {
    let platform = ok("POST", "/v1/vehicle/7/commands/doors/unlock")
        .on(
            "POST",
            "/v1/vehicle/7/commands/frunk/open",
            MockResponse::empty(200),
        )
        .on(
            "POST",
            "/v1/vehicle/7/commands/trunk/open",
            MockResponse::empty(200),
        );
    let server = TestServer::start_mock(platform).await.unwrap();
    let devices = server.client.devices();

    devices.unlock_doors("tok", "7").await.unwrap();
    devices.open_frunk("tok", "7").await.unwrap();
    devices.open_trunk("tok", "7").await.unwrap();

    let paths: Vec<_> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/v1/vehicle/7/commands/doors/unlock",
            "/v1/vehicle/7/commands/frunk/open",
            "/v1/vehicle/7/commands/trunk/open",
        ]
    );
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let platform = MockPlatform::new().on(
        "GET",
        "/v1/aftermarket/device/99",
        MockResponse::text(404, "device not found"),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let err = server
        .client
        .devices()
        .get_aftermarket_device("99")
        .await
        .unwrap_err();

    match err {
        DimoError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "device not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_identifier_rejected_before_request() {
    let server = TestServer::start_mock(MockPlatform::new()).await.unwrap();

    let err = server.client.devices().lock_doors("tok", "").await.unwrap_err();
    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "token_id"));

    let err = server.client.devices().lock_doors("", "42").await.unwrap_err();
    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "token"));

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_identifiers_cannot_leave_their_path_segment() {
    let server = TestServer::start_mock(ok("POST", "/v1/commands/doors/lock"))
        .await
        .unwrap();

    for id in ["..", "."] {
        let err = server.client.devices().lock_doors("tok", id).await.unwrap_err();
        assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "tokenId"));
    }
    let err = server.client.device_definitions().get_by_id(".").await.unwrap_err();
    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "id"));
    assert!(server.requests().is_empty());

    // A backslash stays inside the segment instead of acting as a separator
    let _ = server.client.devices().lock_doors("tok", "a\\b").await;
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v1/vehicle/a%5Cb/commands/doors/lock");
}

// =============================================================================
// Devices with bodies
// =============================================================================

#[tokio::test]
async fn test_create_vehicle_from_vin_body() {
    let server = TestServer::start_mock(ok("POST", "/v1/user/devices/fromvin"))
        .await
        .unwrap();

    server
        .client
        .devices()
        .create_vehicle_from_vin("access", "6", "USA", "1HGCM82633A004352")
        .await
        .unwrap();

    assert_eq!(
        server.requests()[0].json().unwrap(),
        json!({"canProtocol": "6", "countryCode": "USA", "vin": "1HGCM82633A004352"})
    );
}

#[tokio::test]
async fn test_sign_claiming_payload_requires_object() {
    let server = TestServer::start_mock(ok(
        "POST",
        "/v1/aftermarket/device/by-serial/SN1/commands/claim",
    ))
    .await
    .unwrap();
    let devices = server.client.devices();

    let err = devices
        .sign_claiming_payload("access", "SN1", &json!(["not", "an", "object"]))
        .await
        .unwrap_err();
    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "claim_request"));
    assert!(server.requests().is_empty());

    devices
        .sign_claiming_payload("access", "SN1", &json!({"aftermarketDeviceSignature": "0x1"}))
        .await
        .unwrap();
    assert_eq!(
        server.requests()[0].json().unwrap(),
        json!({"claimRequest": {"aftermarketDeviceSignature": "0x1"}})
    );
}

// =============================================================================
// Token exchange
// =============================================================================

#[tokio::test]
async fn test_token_exchange_body() {
    let platform = MockPlatform::new().on(
        "POST",
        "/v1/tokens/exchange",
        MockResponse::json(200, json!({"token": "privileged"})),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let result = server
        .client
        .token_exchange()
        .exchange("t", &[1, 3], "7")
        .await
        .unwrap();
    assert_eq!(result, Some(json!({"token": "privileged"})));

    let requests = server.requests();
    assert_eq!(requests[0].header("authorization"), Some("Bearer t"));
    assert_eq!(
        requests[0].json().unwrap(),
        json!({
            "nftContractAddress": TEST_NFT_ADDRESS,
            "privileges": [1, 3],
            "tokenId": "7",
        })
    );
}

#[tokio::test]
async fn test_token_exchange_requires_privileges() {
    let server = TestServer::start_mock(MockPlatform::new()).await.unwrap();

    let err = server
        .client
        .token_exchange()
        .exchange("t", &[], "7")
        .await
        .unwrap_err();
    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "privileges"));
    assert!(server.requests().is_empty());
}

// =============================================================================
// Trips, user, valuations, device data
// =============================================================================

#[tokio::test]
async fn test_trips_page_is_optional() {
    let server = TestServer::start_mock(ok("GET", "/v1/vehicle/5/trips"))
        .await
        .unwrap();
    let trips = server.client.trips();

    trips.trips("tok", "5", None).await.unwrap();
    trips.trips("tok", "5", Some(3)).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].query, None);
    assert_eq!(requests[1].query.as_deref(), Some("page=3"));
}

#[tokio::test]
async fn test_user_update_and_confirm_email() {
    let platform = ok("PUT", "/v1/user").on(
        "POST",
        "/v1/user/confirm-email",
        MockResponse::empty(204),
    );
    let server = TestServer::start_mock(platform).await.unwrap();
    let user = server.client.user();

    user.update("access", &json!({"countryCode": "DEU"}))
        .await
        .unwrap();
    let confirmed = user.confirm_email("access", "123456").await.unwrap();
    assert_eq!(confirmed, None);

    let requests = server.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].json().unwrap(), json!({"countryCode": "DEU"}));
    assert_eq!(
        requests[1].json().unwrap(),
        json!({"confirmationCode": "123456"})
    );
}

#[tokio::test]
async fn test_valuations_paths() {
    let platform = ok("GET", "/v1/user/devices/ud1/valuations")
        .on(
            "GET",
            "/v1/user/devices/ud1/instant-offer",
            MockResponse::json(200, json!({})),
        )
        .on(
            "GET",
            "/v1/user/devices/ud1/offers",
            MockResponse::json(200, json!([])),
        );
    let server = TestServer::start_mock(platform).await.unwrap();
    let valuations = server.client.valuations();

    valuations.get_valuations("access", "ud1").await.unwrap();
    valuations.get_instant_offer("access", "ud1").await.unwrap();
    let offers = valuations.get_offers("access", "ud1").await.unwrap();
    assert_eq!(offers, Some(json!([])));
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn test_vehicle_history_query() {
    let server = TestServer::start_mock(ok("GET", "/v2/vehicles/42/history"))
        .await
        .unwrap();

    server
        .client
        .device_data()
        .get_vehicle_history("tok", "42", "2024-01-01", "2024-01-31", Some("1d"))
        .await
        .unwrap();

    assert_eq!(
        server.requests()[0].query_pairs(),
        vec![
            ("startDate".to_string(), "2024-01-01".to_string()),
            ("endDate".to_string(), "2024-01-31".to_string()),
            ("buckets".to_string(), "1d".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_attestation_vin_vc() {
    let server = TestServer::start_mock(ok("POST", "/v1/vc/vin/42"))
        .await
        .unwrap();

    server
        .client
        .attestation()
        .create_vin_vc("priv", "42")
        .await
        .unwrap();
    assert_eq!(
        server.requests()[0].header("authorization"),
        Some("Bearer priv")
    );
}

// =============================================================================
// Vehicle signal decoding
// =============================================================================

#[tokio::test]
async fn test_dbc_text_is_returned_as_string() {
    let platform = MockPlatform::new().on(
        "GET",
        "/v1/device-config/dbc/default-ford",
        MockResponse::text(200, "BO_ 2024 OBD2: 8 Vector__XXX"),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let dbc = server
        .client
        .vehicle_signal_decoding()
        .get_dbc_text("default-ford")
        .await
        .unwrap();
    assert_eq!(dbc, Some(json!("BO_ 2024 OBD2: 8 Vector__XXX")));
}

#[tokio::test]
async fn test_set_job_status_path() {
    let server = TestServer::start_mock(ok(
        "PATCH",
        "/v1/device-config/eth-addr/0xabc/jobs/job-1/COMPLETED",
    ))
    .await
    .unwrap();

    server
        .client
        .vehicle_signal_decoding()
        .set_job_status_by_address("priv", "0xabc", "job-1", "COMPLETED")
        .await
        .unwrap();
    assert_eq!(server.requests()[0].method, "PATCH");
}

// =============================================================================
// GraphQL
// =============================================================================

#[tokio::test]
async fn test_identity_query_without_token() {
    let platform = MockPlatform::new().on(
        "POST",
        "/identity/query",
        MockResponse::json(200, json!({"data": {"vehicles": {"totalCount": 1234}}})),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let result = server.client.identity().count_dimo_vehicles().await.unwrap();
    assert_eq!(result["data"]["vehicles"]["totalCount"], 1234);

    let requests = server.requests();
    let request = &requests[0];
    assert!(request.header("authorization").is_none());
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert!(request.header("user-agent").is_some());
    let body = request.json().unwrap();
    assert!(body["query"].as_str().unwrap().contains("totalCount"));
    assert_eq!(body["variables"], json!({}));
}

#[tokio::test]
async fn test_identity_variables() {
    let server = TestServer::start_mock(ok("POST", "/identity/query"))
        .await
        .unwrap();

    server
        .client
        .identity()
        .list_vehicle_definitions_per_address("0xowner", 25)
        .await
        .unwrap();

    let body = server.requests()[0].json().unwrap();
    assert_eq!(body["variables"], json!({"owner": "0xowner", "first": 25}));
}

#[tokio::test]
async fn test_telemetry_query_with_token() {
    let server = TestServer::start_mock(ok("POST", "/telemetry/query"))
        .await
        .unwrap();

    server
        .client
        .telemetry()
        .get_signals_latest("priv", 42)
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].header("authorization"), Some("Bearer priv"));
    assert_eq!(
        requests[0].json().unwrap()["variables"],
        json!({"tokenId": 42})
    );
}

#[tokio::test]
async fn test_graphql_rejects_empty_query() {
    let server = TestServer::start_mock(MockPlatform::new()).await.unwrap();

    let err = server.client.identity().query("  ", None).await.unwrap_err();
    assert!(err.is_validation());
    assert!(server.requests().is_empty());
}
