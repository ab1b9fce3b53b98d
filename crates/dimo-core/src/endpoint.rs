//! Endpoint descriptors
//!
//! An [`Endpoint`] is the static description of one platform call: verb,
//! service, path template and the kind of `Authorization` header it needs.
//! The full table lives in [`crate::endpoints`].

use std::collections::BTreeMap;
use std::fmt;

use crate::environment::Service;
use crate::path::PathTemplate;

/// `Content-Type` header name as sent by the SDK
pub const CONTENT_TYPE: &str = "Content-Type";
/// `Authorization` header name as sent by the SDK
pub const AUTHORIZATION: &str = "Authorization";
/// JSON media type, the default body encoding
pub const APPLICATION_JSON: &str = "application/json";
/// Form media type used by the auth handshake
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP verbs used by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization required by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    /// No `Authorization` header
    None,
    /// `Authorization: Bearer <token>` with an access or privilege token
    Bearer,
}

impl AuthKind {
    /// Headers for this auth kind.
    ///
    /// Bearer calls always carry `Content-Type: application/json` alongside the
    /// token. A bearer endpoint called without a token gets no auth header;
    /// callers are expected to validate presence first.
    pub fn headers(&self, token: Option<&str>) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        if let (AuthKind::Bearer, Some(token)) = (self, token) {
            headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
        }
        headers
    }
}

/// Static description of a platform endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// SDK method name, used in logs and errors
    pub name: &'static str,
    pub method: HttpMethod,
    pub service: Service,
    pub path: PathTemplate,
    pub auth: AuthKind,
}

impl Endpoint {
    /// Single-template endpoint
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        service: Service,
        path: &'static str,
        auth: AuthKind,
    ) -> Self {
        Self {
            name,
            method,
            service,
            path: PathTemplate::Simple(path),
            auth,
        }
    }

    /// Collection/item endpoint selected by presence of `key`
    pub const fn id_keyed(
        name: &'static str,
        method: HttpMethod,
        service: Service,
        collection: &'static str,
        item: &'static str,
        key: &'static str,
        auth: AuthKind,
    ) -> Self {
        Self {
            name,
            method,
            service,
            path: PathTemplate::IdKeyed {
                collection,
                item,
                key,
            },
            auth,
        }
    }

    pub fn requires_token(&self) -> bool {
        self.auth == AuthKind::Bearer
    }
}
