//! dimo-core - Environments, path templates and the endpoint table for the
//! DIMO vehicle-data platform
//!
//! This crate holds everything the SDK knows about the platform that does not
//! involve I/O: which base URL serves which service, how `:param` path
//! templates are rendered, which verb/path/auth each endpoint uses, and the
//! argument checks performed before a request is issued.

pub mod endpoint;
pub mod endpoints;
pub mod environment;
pub mod error;
pub mod path;
pub mod validate;

pub use endpoint::{
    AuthKind, Endpoint, HttpMethod, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE,
    FORM_URLENCODED,
};
pub use environment::{Environment, EnvironmentTable, Service, DEV, PRODUCTION};
pub use error::{CoreError, CoreResult, ErrorKind};
pub use path::{PathParams, PathTemplate};
