//! Path templates with `:param` placeholders.
//!
//! Substitution is strict: every placeholder in a template must have a
//! matching parameter, otherwise rendering fails before any request is built.
//! Extra parameters that the template does not mention are ignored.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{CoreError, CoreResult};

/// Named values substituted into a path template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Path of an endpoint.
///
/// Most endpoints have a single template. Collection/item pairs share one
/// descriptor and pick the item template when the key parameter is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTemplate {
    Simple(&'static str),
    IdKeyed {
        collection: &'static str,
        item: &'static str,
        key: &'static str,
    },
}

impl PathTemplate {
    /// The template that applies for the given parameters
    pub fn select(&self, params: &PathParams) -> &'static str {
        match *self {
            PathTemplate::Simple(template) => template,
            PathTemplate::IdKeyed {
                collection,
                item,
                key,
            } => {
                if params.contains(key) {
                    item
                } else {
                    collection
                }
            }
        }
    }

    /// Select and render in one step
    pub fn render(&self, params: &PathParams) -> CoreResult<String> {
        render_path(self.select(params), params)
    }

    /// All templates this path may resolve to
    pub fn templates(&self) -> Vec<&'static str> {
        match *self {
            PathTemplate::Simple(template) => vec![template],
            PathTemplate::IdKeyed {
                collection, item, ..
            } => vec![collection, item],
        }
    }
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Names of the `:param` placeholders in a template, in order of appearance.
///
/// ```
/// # use dimo_core::path::placeholders;
/// assert_eq!(
///     placeholders("/v1/device-config/eth-addr/:address/jobs/:jobId/:status"),
///     vec!["address", "jobId", "status"]
/// );
/// assert!(placeholders("/v1/events").is_empty());
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(idx) = rest.find(':') {
        let after = &rest[idx + 1..];
        let len = after.find(|c: char| !is_param_char(c)).unwrap_or(after.len());
        if len > 0 {
            names.push(&after[..len]);
        }
        rest = &after[len..];
    }
    names
}

/// Substitute every placeholder in `template` from `params`.
///
/// ```
/// # use dimo_core::path::{render_path, PathParams};
/// let params = PathParams::new().with("tokenId", 42);
/// assert_eq!(
///     render_path("/v1/vehicle/:tokenId/trips", &params).unwrap(),
///     "/v1/vehicle/42/trips"
/// );
/// assert!(render_path("/v1/vehicle/:tokenId/trips", &PathParams::new()).is_err());
/// ```
pub fn render_path(template: &str, params: &PathParams) -> CoreResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(idx) = rest.find(':') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        let len = after.find(|c: char| !is_param_char(c)).unwrap_or(after.len());
        if len == 0 {
            out.push(':');
        } else {
            let name = &after[..len];
            let value = params
                .get(name)
                .ok_or_else(|| CoreError::UnresolvedPathParam {
                    name: name.to_string(),
                    template: template.to_string(),
                })?;
            if value == "." || value == ".." {
                return Err(CoreError::invalid(name, "dot segments are not allowed in a path"));
            }
            out.push_str(&encode_path_segment(value));
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    Ok(out)
}

/// RFC 3986 unreserved characters stay literal; everything else is escaped
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value for use inside a single path segment.
///
/// `.` and `..` pass through unchanged and would still be resolved as dot
/// segments; [`render_path`] rejects them.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
