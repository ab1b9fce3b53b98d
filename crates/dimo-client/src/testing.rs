//! Test utilities for dimo-client
//!
//! Runs an in-process HTTP server standing in for every platform service, so
//! the real client can be exercised end to end without network access.
//!
//! ```rust,ignore
//! use dimo_client::testing::{MockPlatform, MockResponse, TestServer};
//! use serde_json::json;
//!
//! let platform = MockPlatform::new()
//!     .on("GET", "/device-definitions/123", MockResponse::json(200, json!({"id": "123"})));
//! let server = TestServer::start_mock(platform).await?;
//!
//! let def = server.client.device_definitions().get_by_id("123").await?;
//! assert_eq!(server.requests()[0].path, "/device-definitions/123");
//! ```

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use dimo_core::{Environment, Service};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;

use crate::config::ClientConfig;
use crate::{DimoClient, Result};

/// Vehicle NFT contract address of the test environment
pub const TEST_NFT_ADDRESS: &str = "0x00000000000000000000000000000000000000A1";

/// Name of the test environment
pub const TEST_ENVIRONMENT: &str = "Test";

/// Environment that routes every service to `base_url`.
///
/// REST services share the root; the GraphQL services get their own
/// `/identity/query` and `/telemetry/query` paths.
pub fn local_environment(base_url: &str) -> Environment {
    let base = base_url.trim_end_matches('/');
    Service::ALL.iter().fold(
        Environment::new(TEST_ENVIRONMENT)
            .with_nft_address(TEST_NFT_ADDRESS)
            .with_rpc_provider(format!("{}/rpc", base)),
        |env, service| {
            let url = match service {
                Service::Identity => format!("{}/identity/query", base),
                Service::Telemetry => format!("{}/telemetry/query", base),
                _ => base.to_string(),
            };
            env.with_service(service, url)
        },
    )
}

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: DimoClient,
    platform: Option<MockPlatform>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve an arbitrary axum Router
    pub async fn start<S>(router: axum::Router<S>) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        Self::start_with_timeout(router, Duration::from_secs(5), Duration::from_secs(2)).await
    }

    /// Serve a [`MockPlatform`] and record every request it receives
    pub async fn start_mock(platform: MockPlatform) -> Result<Self> {
        let mut server = Self::start(platform.router()).await?;
        server.platform = Some(platform);
        Ok(server)
    }

    /// Serve a router with custom client timeouts
    pub async fn start_with_timeout<S>(
        router: axum::Router<S>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self>
    where
        S: Clone + Send + Sync + 'static,
        axum::Router<S>: Into<axum::Router>,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let router: axum::Router = router.into();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let base_url = format!("http://{}", addr);
        let config = ClientConfig::builder(TEST_ENVIRONMENT)
            .request_timeout_ms(timeout.as_millis() as u64)
            .connect_timeout_ms(connect_timeout.as_millis() as u64)
            .build();
        let client = DimoClient::with_environment_config(local_environment(&base_url), &config)?;

        Ok(Self {
            addr,
            client,
            platform: None,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &DimoClient {
        &self.client
    }

    /// Requests recorded so far, oldest first (empty unless started with a mock)
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.platform
            .as_ref()
            .map(MockPlatform::requests)
            .unwrap_or_default()
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

// =============================================================================
// Mock platform
// =============================================================================

/// Canned reply for a mocked route
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.into().into_bytes(),
        }
    }

    /// Status only, no body
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }
}

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercase
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body parsed as JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Body decoded as `application/x-www-form-urlencoded`
    pub fn form(&self) -> BTreeMap<String, String> {
        url::form_urlencoded::parse(&self.body)
            .into_owned()
            .collect()
    }

    /// Decoded query string pairs, in order
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct MockState {
    routes: Vec<(String, String, MockResponse)>,
    log: Vec<RecordedRequest>,
}

/// Route table plus request log shared with the serving task
#[derive(Clone, Default)]
pub struct MockPlatform {
    state: Arc<Mutex<MockState>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with `response`; unmatched requests get a 404
    pub fn on(self, method: &str, path: &str, response: MockResponse) -> Self {
        self.state.lock().routes.push((
            method.to_ascii_uppercase(),
            path.to_string(),
            response,
        ));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().log.clone()
    }

    /// Router that records and answers every request
    pub fn router(&self) -> axum::Router {
        axum::Router::new()
            .fallback(handle_mock_request)
            .with_state(self.clone())
    }

    fn respond(&self, request: RecordedRequest) -> MockResponse {
        let mut state = self.state.lock();
        let response = state
            .routes
            .iter()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
            .map(|(_, _, response)| response.clone())
            .unwrap_or_else(|| {
                MockResponse::text(
                    404,
                    format!("no mock for {} {}", request.method, request.path),
                )
            });
        state.log.push(request);
        response
    }
}

async fn handle_mock_request(
    State(platform): State<MockPlatform>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.as_str().to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body: body.to_vec(),
    };

    let mock = platform.respond(request);
    let status = StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match mock.content_type {
        Some(content_type) => {
            (status, [(header::CONTENT_TYPE, content_type)], mock.body).into_response()
        }
        None => status.into_response(),
    }
}
