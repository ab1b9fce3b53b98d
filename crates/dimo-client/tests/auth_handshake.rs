//! Integration tests for the web3 authentication handshake
//!
//! Each test runs the real client against an in-process mock of the Auth
//! service and inspects what went over the wire.

use dimo_client::signing;
use dimo_client::testing::{MockPlatform, MockResponse, TestServer};
use dimo_client::{validate, ChallengeRequest, DimoError, Headers, TokenRequest};
use pretty_assertions::assert_eq;
use serde_json::json;

const GENERATE: &str = "/auth/web3/generate_challenge";
const SUBMIT: &str = "/auth/web3/submit_challenge";

// Hardhat/Anvil development account #0
const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

const CLIENT_ID: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
const DOMAIN: &str = "https://app.example.com/callback";
const CHALLENGE: &str = "auth.dimo.zone wants you to sign in with your Ethereum account:\nnonce 8f2c";

fn handshake_platform() -> MockPlatform {
    MockPlatform::new()
        .on(
            "POST",
            GENERATE,
            MockResponse::json(200, json!({"challenge": CHALLENGE, "state": "state-123"})),
        )
        .on(
            "POST",
            SUBMIT,
            MockResponse::json(
                200,
                json!({"access_token": "access-abc", "token_type": "Bearer", "expires_in": 3600}),
            ),
        )
}

#[tokio::test]
async fn test_get_token_full_handshake() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();

    let token = server
        .client
        .auth()
        .get_token(&TokenRequest::new(CLIENT_ID, DOMAIN, PRIVATE_KEY))
        .await
        .unwrap();
    assert_eq!(token.access_token, "access-abc");
    assert_eq!(token.expires_in, Some(3600));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, GENERATE);
    assert_eq!(requests[1].path, SUBMIT);

    for request in &requests {
        assert_eq!(request.method, "POST");
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert!(request.header("authorization").is_none());
    }

    let challenge_form = requests[0].form();
    assert_eq!(challenge_form["client_id"], CLIENT_ID);
    assert_eq!(challenge_form["domain"], DOMAIN);
    assert_eq!(challenge_form["scope"], "openid email");
    assert_eq!(challenge_form["response_type"], "code");
    // Address defaults to the client id
    assert_eq!(challenge_form["address"], CLIENT_ID);

    let submit_form = requests[1].form();
    assert_eq!(submit_form["client_id"], CLIENT_ID);
    assert_eq!(submit_form["domain"], DOMAIN);
    assert_eq!(submit_form["state"], "state-123");
    assert_eq!(submit_form["grant_type"], "authorization_code");

    let expected = signing::sign_challenge(CHALLENGE, PRIVATE_KEY).unwrap();
    assert_eq!(submit_form["signature"], expected);
    let recovered = signing::recover_signer(CHALLENGE, &submit_form["signature"]).unwrap();
    assert_eq!(recovered.to_checksum(None), ADDRESS);
}

#[tokio::test]
async fn test_signature_is_deterministic_across_handshakes() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();
    let request = TokenRequest::new(CLIENT_ID, DOMAIN, PRIVATE_KEY);

    server.client.auth().get_token(&request).await.unwrap();
    server.client.auth().get_token(&request).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(
        requests[1].form()["signature"],
        requests[3].form()["signature"]
    );
}

#[tokio::test]
async fn test_explicit_address_and_scope() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();

    let request = TokenRequest::new("my-client", DOMAIN, PRIVATE_KEY)
        .address(ADDRESS)
        .scope("openid");
    server.client.auth().get_token(&request).await.unwrap();

    let form = server.requests()[0].form();
    assert_eq!(form["client_id"], "my-client");
    assert_eq!(form["address"], ADDRESS);
    assert_eq!(form["scope"], "openid");
}

#[tokio::test]
async fn test_step_one_failure_stops_handshake() {
    let platform = MockPlatform::new().on(
        "POST",
        GENERATE,
        MockResponse::text(400, "invalid client_id"),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let err = server
        .client
        .auth()
        .get_token(&TokenRequest::new(CLIENT_ID, DOMAIN, PRIVATE_KEY))
        .await
        .unwrap_err();

    match err {
        DimoError::Http { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid client_id");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_private_key_fails_before_any_request() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();

    let err = server
        .client
        .auth()
        .get_token(&TokenRequest::new(CLIENT_ID, DOMAIN, "0xdeadbeef"))
        .await
        .unwrap_err();

    assert!(matches!(err, DimoError::Validation { ref param, .. } if param == "private_key"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_non_form_headers_rejected_before_request() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();
    let auth = server.client.auth();
    let challenge = ChallengeRequest::new(CLIENT_ID, DOMAIN);

    let rejected: Vec<Headers> = vec![
        Headers::new(),
        Headers::from([("Content-Type".into(), "application/json".into())]),
        Headers::from([(
            "content-type".into(),
            "application/x-www-form-urlencoded".into(),
        )]),
        Headers::from([
            (
                "Content-Type".into(),
                "application/x-www-form-urlencoded".into(),
            ),
            ("Accept".into(), "application/json".into()),
        ]),
    ];

    for headers in &rejected {
        let err = auth.generate_challenge(&challenge, headers).await.unwrap_err();
        assert!(err.is_protocol(), "expected protocol error, got {err}");

        let err = auth
            .submit_challenge(CLIENT_ID, DOMAIN, "state", "0xsig", headers)
            .await
            .unwrap_err();
        assert!(err.is_protocol(), "expected protocol error, got {err}");
    }

    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_steps_can_be_driven_individually() {
    let server = TestServer::start_mock(handshake_platform()).await.unwrap();
    let auth = server.client.auth();
    let headers = validate::form_headers();

    let challenge = auth
        .generate_challenge(&ChallengeRequest::new(CLIENT_ID, DOMAIN), &headers)
        .await
        .unwrap();
    assert_eq!(challenge.challenge, CHALLENGE);
    assert_eq!(challenge.state, "state-123");

    let signature = auth.sign_challenge(&challenge.challenge, PRIVATE_KEY).unwrap();
    // Signing is local
    assert_eq!(server.requests().len(), 1);

    let token = auth
        .submit_challenge(CLIENT_ID, DOMAIN, &challenge.state, &signature, &headers)
        .await
        .unwrap();
    assert_eq!(token.access_token, "access-abc");
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_malformed_challenge_response() {
    let platform = MockPlatform::new().on(
        "POST",
        GENERATE,
        MockResponse::json(200, json!({"unexpected": true})),
    );
    let server = TestServer::start_mock(platform).await.unwrap();

    let err = server
        .client
        .auth()
        .get_token(&TokenRequest::new(CLIENT_ID, DOMAIN, PRIVATE_KEY))
        .await
        .unwrap_err();
    assert!(matches!(err, DimoError::Parse(_)));
    assert_eq!(server.requests().len(), 1);
}
