//! Named platform environments
//!
//! An [`Environment`] maps each logical service name to the base URL of the
//! microservice that serves it, and carries the per-environment constants the
//! SDK needs (vehicle NFT contract address, RPC provider). Environments are
//! grouped into an [`EnvironmentTable`], which can be loaded from YAML, TOML
//! or JSON:
//!
//! ```yaml
//! Staging:
//!   nft_address: "0x0000000000000000000000000000000000000001"
//!   rpc_provider: "https://rpc.example.com"
//!   urls:
//!     Auth: "https://auth.staging.example.com"
//!     Devices: "https://devices.staging.example.com"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};

const BUILTIN_ENVIRONMENTS: &str = include_str!("../environments.yaml");

/// Name of the production environment
pub const PRODUCTION: &str = "Production";
/// Name of the development environment
pub const DEV: &str = "Dev";

/// Logical services exposed by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    Attestation,
    Auth,
    DeviceData,
    DeviceDefinitions,
    Devices,
    Events,
    Identity,
    Telemetry,
    TokenExchange,
    Trips,
    User,
    Valuations,
    VehicleSignalDecoding,
}

impl Service {
    /// Every known service
    pub const ALL: [Service; 13] = [
        Service::Attestation,
        Service::Auth,
        Service::DeviceData,
        Service::DeviceDefinitions,
        Service::Devices,
        Service::Events,
        Service::Identity,
        Service::Telemetry,
        Service::TokenExchange,
        Service::Trips,
        Service::User,
        Service::Valuations,
        Service::VehicleSignalDecoding,
    ];

    /// Key used for this service in environment URL tables
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Attestation => "Attestation",
            Service::Auth => "Auth",
            Service::DeviceData => "DeviceData",
            Service::DeviceDefinitions => "DeviceDefinitions",
            Service::Devices => "Devices",
            Service::Events => "Events",
            Service::Identity => "Identity",
            Service::Telemetry => "Telemetry",
            Service::TokenExchange => "TokenExchange",
            Service::Trips => "Trips",
            Service::User => "User",
            Service::Valuations => "Valuations",
            Service::VehicleSignalDecoding => "VehicleSignalDecoding",
        }
    }

    /// Whether this service speaks GraphQL rather than REST
    pub fn is_graphql(&self) -> bool {
        matches!(self, Service::Identity | Service::Telemetry)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Service {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A named URL table plus per-environment constants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Filled from the table key when loaded through [`EnvironmentTable`]
    #[serde(default, skip_serializing)]
    name: String,

    /// Service name -> base URL
    #[serde(default)]
    urls: BTreeMap<String, String>,

    /// Vehicle NFT contract address used by token exchange
    #[serde(default)]
    nft_address: String,

    /// JSON-RPC provider for this environment's chain
    #[serde(default)]
    rpc_provider: String,
}

impl Environment {
    /// Create an empty environment
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            urls: BTreeMap::new(),
            nft_address: String::new(),
            rpc_provider: String::new(),
        }
    }

    /// Set the base URL of a service
    pub fn with_service(mut self, service: impl AsRef<str>, base_url: impl Into<String>) -> Self {
        self.urls
            .insert(service.as_ref().to_string(), base_url.into());
        self
    }

    /// Set the vehicle NFT contract address
    pub fn with_nft_address(mut self, address: impl Into<String>) -> Self {
        self.nft_address = address.into();
        self
    }

    /// Set the RPC provider URL
    pub fn with_rpc_provider(mut self, url: impl Into<String>) -> Self {
        self.rpc_provider = url.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nft_address(&self) -> &str {
        &self.nft_address
    }

    pub fn rpc_provider(&self) -> &str {
        &self.rpc_provider
    }

    /// Names of every service this environment knows about
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.urls.keys().map(String::as_str)
    }

    /// Resolve a service name to its base URL (without trailing slash)
    pub fn base_url(&self, service: &str) -> CoreResult<&str> {
        self.urls
            .get(service)
            .map(|url| url.trim_end_matches('/'))
            .ok_or_else(|| CoreError::UnknownService {
                service: service.to_string(),
                environment: self.name.clone(),
            })
    }
}

/// Environment name -> [`Environment`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentTable {
    environments: BTreeMap<String, Environment>,
}

impl EnvironmentTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in `Production` and `Dev` environments
    pub fn builtin() -> CoreResult<Self> {
        Self::from_yaml(BUILTIN_ENVIRONMENTS)
    }

    /// Load a table from YAML text
    pub fn from_yaml(yaml: &str) -> CoreResult<Self> {
        serde_yaml::from_str::<Self>(yaml)
            .map(Self::with_names)
            .map_err(|e| CoreError::ParseError(e.to_string()))
    }

    /// Load a table from TOML text
    pub fn from_toml(text: &str) -> CoreResult<Self> {
        toml::from_str::<Self>(text)
            .map(Self::with_names)
            .map_err(|e| CoreError::ParseError(e.to_string()))
    }

    /// Load a table from JSON text
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str::<Self>(json)
            .map(Self::with_names)
            .map_err(|e| CoreError::ParseError(e.to_string()))
    }

    /// Load a table from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        debug!("Loading environment table from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load a table from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        debug!("Loading environment table from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Add or replace an environment
    pub fn insert(&mut self, env: Environment) {
        self.environments.insert(env.name.clone(), env);
    }

    /// Overlay another table on top of this one; entries in `other` win
    pub fn merge(mut self, other: EnvironmentTable) -> Self {
        self.environments.extend(other.environments);
        self.with_names()
    }

    /// Look up an environment by name
    pub fn get(&self, name: &str) -> CoreResult<&Environment> {
        self.environments
            .get(name)
            .ok_or_else(|| CoreError::UnknownEnvironment(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    fn with_names(mut self) -> Self {
        for (name, env) in self.environments.iter_mut() {
            env.name = name.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_table_parses() {
        let table = EnvironmentTable::builtin().unwrap();
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec![DEV, PRODUCTION]);
    }

    #[test]
    fn builtin_environments_cover_every_service() {
        let table = EnvironmentTable::builtin().unwrap();
        for name in [PRODUCTION, DEV] {
            let env = table.get(name).unwrap();
            assert_eq!(env.name(), name);
            for service in Service::ALL {
                assert!(
                    env.base_url(service.as_str()).is_ok(),
                    "{} missing in {}",
                    service,
                    name
                );
            }
            assert!(env.nft_address().starts_with("0x"));
            assert!(!env.rpc_provider().is_empty());
        }
    }

    #[test]
    fn production_urls() {
        let table = EnvironmentTable::builtin().unwrap();
        let prod = table.get(PRODUCTION).unwrap();
        assert_eq!(prod.base_url("Auth").unwrap(), "https://auth.dimo.zone");
        assert_eq!(
            prod.base_url("Identity").unwrap(),
            "https://identity-api.dimo.zone/query"
        );
        assert_eq!(
            prod.nft_address(),
            "0xbA5738a18d83D41847dfFbDC6101d37C69c9B0cF"
        );
    }

    #[test]
    fn unknown_environment() {
        let table = EnvironmentTable::builtin().unwrap();
        let err = table.get("Staging").unwrap_err();
        assert!(matches!(err, CoreError::UnknownEnvironment(ref n) if n == "Staging"));
    }

    #[test]
    fn unknown_service() {
        let env = Environment::new("Local").with_service(Service::Auth, "http://localhost:1");
        let err = env.base_url("Trips").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown service `Trips` in environment Local"
        );
    }

    #[test]
    fn base_url_trims_trailing_slash() {
        let env = Environment::new("Local").with_service("Auth", "http://localhost:8080/");
        assert_eq!(env.base_url("Auth").unwrap(), "http://localhost:8080");
    }

    #[test]
    fn toml_table() {
        let text = r#"
[Local]
nft_address = "0x01"
rpc_provider = "http://localhost:8545"

[Local.urls]
Auth = "http://localhost:9000"
"#;
        let table = EnvironmentTable::from_toml(text).unwrap();
        let env = table.get("Local").unwrap();
        assert_eq!(env.name(), "Local");
        assert_eq!(env.base_url("Auth").unwrap(), "http://localhost:9000");
        assert_eq!(env.rpc_provider(), "http://localhost:8545");
    }

    #[test]
    fn json_table() {
        let table = EnvironmentTable::from_json(
            r#"{"Local": {"urls": {"Trips": "http://localhost:9001"}}}"#,
        )
        .unwrap();
        assert_eq!(
            table.get("Local").unwrap().base_url("Trips").unwrap(),
            "http://localhost:9001"
        );
    }

    #[test]
    fn yaml_file_and_merge() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envs.yaml");
        std::fs::write(
            &path,
            "Production:\n  urls:\n    Auth: \"http://override\"\n",
        )
        .unwrap();

        let custom = EnvironmentTable::from_yaml_file(&path).unwrap();
        let merged = EnvironmentTable::builtin().unwrap().merge(custom);
        let prod = merged.get(PRODUCTION).unwrap();
        assert_eq!(prod.base_url("Auth").unwrap(), "http://override");
        // Replacing an environment replaces its whole URL table
        assert!(prod.base_url("Trips").is_err());
        assert!(merged.get(DEV).is_ok());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = EnvironmentTable::from_yaml("- not\n- a map").unwrap_err();
        assert!(matches!(err, CoreError::ParseError(_)));
    }

    #[test]
    fn graphql_services() {
        assert!(Service::Identity.is_graphql());
        assert!(Service::Telemetry.is_graphql());
        assert!(!Service::Devices.is_graphql());
    }
}
