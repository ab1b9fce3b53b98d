//! Error types for DIMO client operations

use dimo_core::{CoreError, ErrorKind};
use thiserror::Error;

/// Result type alias for DIMO client operations
pub type Result<T> = std::result::Result<T, DimoError>;

/// Errors that can occur during DIMO client operations
#[derive(Error, Debug)]
pub enum DimoError {
    /// Caller-supplied argument failed validation; no request was sent
    #[error("Invalid argument `{param}`: {reason}")]
    Validation { param: String, reason: String },

    /// Unknown environment/service or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Protocol input constraint violated (auth handshake header map)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Challenge signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl DimoError {
    /// Create a validation error
    pub fn validation(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body of an HTTP error
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}

impl From<CoreError> for DimoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument { param, reason } => Self::Validation { param, reason },
            CoreError::UnresolvedPathParam { name, template } => Self::Validation {
                param: name,
                reason: format!("required by path template {}", template),
            },
            other => match other.kind() {
                ErrorKind::Protocol => Self::Protocol(other.to_string()),
                ErrorKind::Validation => Self::validation("argument", other.to_string()),
                ErrorKind::Configuration => Self::Config(other.to_string()),
            },
        }
    }
}
