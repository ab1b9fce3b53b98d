//! DIMO Client Library
//!
//! Async SDK for the DIMO vehicle-data platform: REST resource groups, the
//! Identity and Telemetry GraphQL APIs, and the web3 challenge/response
//! handshake that yields an access token.
//!
//! # Example
//!
//! ```rust,no_run
//! use dimo_client::{DimoClient, TokenRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dimo = DimoClient::new("Production")?;
//!
//!     // Obtain an access token by signing a challenge with the app's key
//!     let token = dimo
//!         .auth()
//!         .get_token(&TokenRequest::new(
//!             "0xYourClientId",
//!             "https://your.app/callback",
//!             "0xYourPrivateKey",
//!         ))
//!         .await?;
//!
//!     // Exchange it for a privilege token on vehicle 42
//!     let privileged = dimo
//!         .token_exchange()
//!         .exchange(&token.access_token, &[1, 3, 4], "42")
//!         .await?;
//!
//!     // Public endpoints need no token
//!     let makes = dimo.device_definitions().list_device_makes().await?;
//!     let total = dimo.identity().count_dimo_vehicles().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Generic dispatch
//!
//! Endpoints not covered by a resource group can be reached through
//! [`DimoClient::request`] or, for table entries, [`DimoClient::call`]:
//!
//! ```rust,ignore
//! use dimo_client::{HttpMethod, RequestOptions};
//!
//! let trips = dimo
//!     .request(
//!         HttpMethod::Get,
//!         "Trips",
//!         "/v1/vehicle/:tokenId/trips",
//!         RequestOptions::new()
//!             .param("tokenId", 42)
//!             .header("Authorization", format!("Bearer {privilege_token}")),
//!     )
//!     .await?;
//! ```
//!
//! # Testing
//!
//! The `testing` module runs an in-process mock platform:
//!
//! ```rust,ignore
//! use dimo_client::testing::{MockPlatform, MockResponse, TestServer};
//!
//! let server = TestServer::start_mock(
//!     MockPlatform::new().on("GET", "/device-makes", MockResponse::json(200, json!([]))),
//! )
//! .await?;
//! let makes = server.client.device_definitions().list_device_makes().await?;
//! ```

pub mod auth;
mod client;
pub mod config;
mod error;
pub mod request;
pub mod resources;
pub mod signing;
pub mod testing;

pub use auth::{Challenge, ChallengeRequest, TokenRequest, TokenResponse};
pub use client::DimoClient;
pub use config::{ClientConfig, ClientConfigBuilder, TimeoutsConfig};
pub use error::{DimoError, Result};
pub use request::{Headers, RequestOptions};

// Re-export core types for convenience
pub use dimo_core::{
    endpoints, validate, AuthKind, Endpoint, Environment, EnvironmentTable, HttpMethod,
    PathParams, Service, DEV, PRODUCTION,
};
