//! Per-call request options and body encoding

use std::collections::BTreeMap;
use std::time::Duration;

use dimo_core::{PathParams, APPLICATION_JSON, CONTENT_TYPE, FORM_URLENCODED};
use serde_json::Value;

use crate::error::{DimoError, Result};

/// Header name -> value, as supplied by callers
pub type Headers = BTreeMap<String, String>;

/// Optional parts of a dispatched request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers; a `Content-Type` here selects the body encoding
    pub headers: Headers,
    /// Query string pairs, sent in order
    pub query: Vec<(String, String)>,
    /// Request body, encoded according to the effective `Content-Type`
    pub body: Option<Value>,
    /// Values for `:param` placeholders in the path
    pub params: PathParams,
    /// Overrides the client-wide request timeout for this call
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any existing header of the same name in any case
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        insert_header(&mut self.headers, name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        merge_headers(&mut self.headers, headers);
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query pair only when `value` is present
    pub fn query_opt(self, name: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Effective `Content-Type`: the caller's header (any case) or JSON
    pub fn content_type(&self) -> &str {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(CONTENT_TYPE))
            .map(|(_, value)| value.as_str())
            .unwrap_or(APPLICATION_JSON)
    }
}

/// Insert `name`, dropping other entries that differ from it only in case
pub(crate) fn insert_header(headers: &mut Headers, name: String, value: String) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

/// Apply `extra` over `headers`; later names win regardless of case
pub(crate) fn merge_headers(headers: &mut Headers, extra: Headers) {
    for (name, value) in extra {
        insert_header(headers, name, value);
    }
}

/// Media type without parameters, lowercased
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Encode `body` for the given `Content-Type`.
///
/// JSON media types serialize the value as JSON. Form encoding requires an
/// object whose values are scalars or arrays of scalars; arrays repeat the
/// key. Any other media type accepts only a string body, sent verbatim.
pub fn encode_body(content_type: &str, body: &Value) -> Result<Vec<u8>> {
    let media = media_type(content_type);
    if media == APPLICATION_JSON || media.ends_with("+json") {
        return serde_json::to_vec(body).map_err(|e| DimoError::validation("body", e.to_string()));
    }
    if media == FORM_URLENCODED {
        return encode_form(body).map(String::into_bytes);
    }
    match body {
        Value::String(text) => Ok(text.clone().into_bytes()),
        _ => Err(DimoError::validation(
            "body",
            format!("cannot encode a JSON value as {}", content_type),
        )),
    }
}

/// `application/x-www-form-urlencoded` encoding of a JSON object
pub fn encode_form(body: &Value) -> Result<String> {
    let fields = body
        .as_object()
        .ok_or_else(|| DimoError::validation("body", "form body must be a JSON object"))?;

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(key, &form_scalar(key, item)?);
                }
            }
            other => {
                serializer.append_pair(key, &form_scalar(key, other)?);
            }
        }
    }
    Ok(serializer.finish())
}

fn form_scalar(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Err(DimoError::validation(
            key,
            "nested values cannot be form-encoded",
        )),
    }
}
