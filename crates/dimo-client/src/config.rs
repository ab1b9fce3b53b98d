//! Client configuration with YAML/TOML support
//!
//! ```yaml
//! environment: Production
//! user_agent: my-fleet-app/1.0
//! timeouts:
//!   request_ms: 30000
//!   connect_ms: 10000
//! # Optional: extra or replacement environments
//! environments:
//!   Local:
//!     nft_address: "0x0000000000000000000000000000000000000001"
//!     urls:
//!       Auth: "http://localhost:9000"
//! ```

use std::path::Path;
use std::time::Duration;

use dimo_core::{Environment, EnvironmentTable, PRODUCTION};
use serde::{Deserialize, Serialize};

use crate::error::{DimoError, Result};

/// Default `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("dimo-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// DIMO client configuration
///
/// Can be loaded from YAML, TOML, JSON or constructed programmatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the active environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: TimeoutsConfig,

    /// `User-Agent` header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Environments overlaid on the built-in table
    #[serde(default)]
    pub environments: Option<EnvironmentTable>,
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    /// Whole-request timeout (ms)
    #[serde(default = "default_request_timeout")]
    pub request_ms: u64,

    /// Connection establishment timeout (ms)
    #[serde(default = "default_connect_timeout")]
    pub connect_ms: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            request_ms: default_request_timeout(),
            connect_ms: default_connect_timeout(),
        }
    }
}

impl TimeoutsConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }
}

fn default_environment() -> String {
    PRODUCTION.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_connect_timeout() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(PRODUCTION)
    }
}

impl ClientConfig {
    /// Defaults for the named environment
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            timeouts: TimeoutsConfig::default(),
            user_agent: default_user_agent(),
            environments: None,
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| DimoError::Config(e.to_string()))
    }

    /// Parse configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| DimoError::Config(e.to_string()))
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DimoError::Config(e.to_string()))
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| DimoError::Config(e.to_string()))
    }

    /// Create a builder for programmatic configuration
    pub fn builder(environment: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(environment)
    }

    /// Built-in table overlaid with any configured environments
    pub fn environment_table(&self) -> Result<EnvironmentTable> {
        let builtin = EnvironmentTable::builtin()?;
        Ok(match &self.environments {
            Some(custom) => builtin.merge(custom.clone()),
            None => builtin,
        })
    }

    /// The environment this configuration selects
    pub fn resolve_environment(&self) -> Result<Environment> {
        let table = self.environment_table()?;
        Ok(table.get(&self.environment)?.clone())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(environment),
        }
    }

    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeouts.request_ms = ms;
        self
    }

    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeouts.connect_ms = ms;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Add or replace an environment
    pub fn environment_entry(mut self, env: Environment) -> Self {
        self.config
            .environments
            .get_or_insert_with(EnvironmentTable::new)
            .insert(env);
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
