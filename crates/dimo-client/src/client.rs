//! DIMO HTTP client and request dispatcher

use std::sync::Arc;

use dimo_core::path::render_path;
use dimo_core::validate;
use dimo_core::{Endpoint, Environment, HttpMethod, APPLICATION_JSON, AUTHORIZATION};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{DimoError, Result};
use crate::request::{encode_body, merge_headers, Headers, RequestOptions};
use crate::resources::{
    Attestation, Auth, DeviceData, DeviceDefinitions, Devices, Events, Identity, Telemetry,
    TokenExchange, Trips, User, Valuations, VehicleSignalDecoding,
};

/// DIMO platform client
///
/// Owns the HTTP connection pool and the active [`Environment`]. Cloning is
/// cheap; clones share both.
#[derive(Debug, Clone)]
pub struct DimoClient {
    client: Client,
    env: Arc<Environment>,
}

impl DimoClient {
    /// Create a client for a built-in environment (`"Production"` or `"Dev"`)
    ///
    /// Fails with a configuration error for unknown names.
    pub fn new(environment: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(environment))
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let env = config.resolve_environment()?;
        Self::with_environment_config(env, config)
    }

    /// Create a client for an explicitly supplied environment
    pub fn with_environment(env: Environment) -> Result<Self> {
        let config = ClientConfig::new(env.name());
        Self::with_environment_config(env, &config)
    }

    /// Create a client for an explicit environment with custom timeouts/user agent
    pub fn with_environment_config(env: Environment, config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .user_agent(config.user_agent.as_str())
            .build()?;

        debug!("DIMO client using environment {}", env.name());
        Ok(Self {
            client,
            env: Arc::new(env),
        })
    }

    /// The active environment
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Get a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Fully qualified URL for a service and an already rendered path
    pub fn url_for(&self, service: &str, path: &str) -> Result<Url> {
        let base = self.env.base_url(service)?;
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Issue one request against a service of the active environment.
    ///
    /// `path` may contain `:param` placeholders, which must all be present in
    /// `options.params`. Returns `None` for an empty success body.
    #[instrument(skip(self, options))]
    pub async fn request(
        &self,
        method: HttpMethod,
        service: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>> {
        let rendered = render_path(path, &options.params)?;
        let url = self.url_for(service, &rendered)?;
        let headers = header_map(&options.headers)?;
        let body = match &options.body {
            Some(body) => Some(encode_body(options.content_type(), body)?),
            None => None,
        };

        let mut builder = self
            .client
            .request(reqwest_method(method), url.clone())
            .headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        debug!("{} {}", method, url);
        let response = builder.send().await?;
        handle_response(response).await
    }

    /// Dispatch a call described by an endpoint table entry.
    ///
    /// Bearer endpoints require a non-empty `token`. The endpoint's auth
    /// headers are merged with `options.headers`; caller headers win,
    /// compared case-insensitively.
    #[instrument(skip(self, endpoint, token, options), fields(endpoint = endpoint.name))]
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        mut options: RequestOptions,
    ) -> Result<Option<Value>> {
        if endpoint.requires_token() {
            match token {
                Some(token) => validate::non_empty("token", token)?,
                None => {
                    return Err(DimoError::validation(
                        "token",
                        format!("{} requires a bearer token", endpoint.name),
                    ))
                }
            }
        }

        let mut headers = endpoint.auth.headers(token);
        merge_headers(&mut headers, std::mem::take(&mut options.headers));
        options.headers = headers;

        let path = endpoint.path.select(&options.params);
        self.request(endpoint.method, endpoint.service.as_str(), path, options)
            .await
    }

    /// POST a GraphQL document to `service`.
    ///
    /// The body is `{"query": ..., "variables": ...}` with `variables`
    /// defaulting to `{}`. A bearer header is attached only when `token` is
    /// given.
    #[instrument(skip(self, query, variables, token))]
    pub async fn query(
        &self,
        service: &str,
        query: &str,
        variables: Option<Value>,
        token: Option<&str>,
    ) -> Result<Value> {
        validate::non_empty("query", query)?;
        validate::optional_non_empty("token", token)?;
        if let Some(vars) = &variables {
            validate::json_object("variables", vars)?;
        }

        let mut options = RequestOptions::new()
            .header(header::CONTENT_TYPE.as_str(), APPLICATION_JSON)
            .body(json!({
                "query": query,
                "variables": variables.unwrap_or_else(|| json!({})),
            }));
        if let Some(token) = token {
            options = options.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        self.request(HttpMethod::Post, service, "", options)
            .await?
            .ok_or_else(|| DimoError::Parse("empty GraphQL response".to_string()))
    }

    // =========================================================================
    // Resource groups
    // =========================================================================

    pub fn attestation(&self) -> Attestation<'_> {
        Attestation { client: self }
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn device_data(&self) -> DeviceData<'_> {
        DeviceData { client: self }
    }

    pub fn device_definitions(&self) -> DeviceDefinitions<'_> {
        DeviceDefinitions { client: self }
    }

    pub fn devices(&self) -> Devices<'_> {
        Devices { client: self }
    }

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    pub fn token_exchange(&self) -> TokenExchange<'_> {
        TokenExchange { client: self }
    }

    pub fn trips(&self) -> Trips<'_> {
        Trips { client: self }
    }

    pub fn user(&self) -> User<'_> {
        User { client: self }
    }

    pub fn valuations(&self) -> Valuations<'_> {
        Valuations { client: self }
    }

    pub fn vehicle_signal_decoding(&self) -> VehicleSignalDecoding<'_> {
        VehicleSignalDecoding { client: self }
    }

    /// Identity GraphQL API
    pub fn identity(&self) -> Identity<'_> {
        Identity { client: self }
    }

    /// Telemetry GraphQL API
    pub fn telemetry(&self) -> Telemetry<'_> {
        Telemetry { client: self }
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Overlay `extra` on `headers`, replacing names that differ only in case
fn header_map(headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            DimoError::validation("headers", format!("invalid header name {:?}: {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            DimoError::validation("headers", format!("invalid value for {}: {}", name, e))
        })?;
        if map.contains_key(&header_name) {
            return Err(DimoError::validation(
                "headers",
                format!("header {} given more than once", name),
            ));
        }
        map.insert(header_name, header_value);
    }
    if !map.contains_key(header::CONTENT_TYPE) {
        map.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        );
    }
    Ok(map)
}

async fn handle_response(response: reqwest::Response) -> Result<Option<Value>> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        warn!(status = status.as_u16(), "Request failed: {}", body);
        return Err(DimoError::Http {
            status: status.as_u16(),
            body,
        });
    }

    parse_body(&content_type, &bytes)
}

/// Interpret a success body: empty -> `None`, `text/*` -> string, else JSON
fn parse_body(content_type: &str, bytes: &[u8]) -> Result<Option<Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    if content_type.starts_with("text/") {
        return Ok(Some(Value::String(
            String::from_utf8_lossy(bytes).into_owned(),
        )));
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|e| DimoError::Parse(e.to_string()))
}
