//! Common error types for environment lookup, templating and validation

use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Broad classification of a [`CoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-supplied argument is malformed
    Validation,
    /// Unknown environment/service or unreadable configuration
    Configuration,
    /// A protocol-level input constraint was violated
    Protocol,
}

/// Errors raised before any network call is made
#[derive(Debug, Error)]
pub enum CoreError {
    /// Argument failed a shape check
    #[error("Invalid argument `{param}`: {reason}")]
    InvalidArgument { param: String, reason: String },

    /// Path template references a parameter the caller did not supply
    #[error("Unresolved path parameter `:{name}` in template {template}")]
    UnresolvedPathParam { name: String, template: String },

    /// Environment name not present in the environment table
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    /// Service name not present in the active environment
    #[error("Unknown service `{service}` in environment {environment}")]
    UnknownService {
        service: String,
        environment: String,
    },

    /// Environment table could not be parsed
    #[error("Failed to parse environment table: {0}")]
    ParseError(String),

    /// Environment table file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Form-encoded auth step received a header map other than the required one
    #[error("Headers must be exactly {{\"Content-Type\": \"application/x-www-form-urlencoded\"}}, got {0}")]
    FormHeaders(String),
}

impl CoreError {
    /// Create an invalid argument error
    pub fn invalid(param: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            reason: reason.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidArgument { .. } | CoreError::UnresolvedPathParam { .. } => {
                ErrorKind::Validation
            }
            CoreError::UnknownEnvironment(_)
            | CoreError::UnknownService { .. }
            | CoreError::ParseError(_)
            | CoreError::Io(_) => ErrorKind::Configuration,
            CoreError::FormHeaders(_) => ErrorKind::Protocol,
        }
    }
}
