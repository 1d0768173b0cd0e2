//! Configuration types and builders.
//!
//! Every setting is optional; the mock server runs with defaults alone.
//! `WEATHER_API_KEY` exists for display and logging only, nothing in the
//! mock logic consumes it.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::env;

/// Default API key used when `WEATHER_API_KEY` is unset.
pub const DEFAULT_API_KEY: &str = "demo_key";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: Cow<'static, str>,
    pub version: Cow<'static, str>,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "weather-mcp-server".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            api_key: DEFAULT_API_KEY.into(),
            log_level: "info".into(),
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Whether the operator supplied a real API key.
    pub fn has_custom_api_key(&self) -> bool {
        self.api_key != DEFAULT_API_KEY
    }
}

/// Builder for ServerConfig with fluent API.
#[derive(Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<Cow<'static, str>>) -> Self {
        self.config.version = version.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn log_level(mut self, log_level: impl Into<String>) -> Self {
        self.config.log_level = log_level.into();
        self
    }

    /// Apply overrides from environment variables.
    ///
    /// Recognized: `SERVER_NAME`, `SERVER_VERSION`, `WEATHER_API_KEY`,
    /// `LOG_LEVEL`. Unset variables keep their defaults.
    pub fn from_env(self) -> Self {
        self.from_source(|key| env::var(key).ok())
    }

    fn from_source(mut self, get: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = get("SERVER_NAME") {
            self.config.name = name.into();
        }
        if let Some(version) = get("SERVER_VERSION") {
            self.config.version = version.into();
        }
        if let Some(api_key) = get("WEATHER_API_KEY") {
            self.config.api_key = api_key;
        }
        if let Some(log_level) = get("LOG_LEVEL") {
            self.config.log_level = log_level.to_lowercase();
        }
        self
    }

    pub fn build(self) -> Result<ServerConfig> {
        self.validate()?;
        Ok(self.config)
    }

    fn validate(&self) -> Result<()> {
        if self.config.name.is_empty() {
            return Err(ConfigError::MissingField("name".into()).into());
        }
        if self.config.version.is_empty() {
            return Err(ConfigError::MissingField("version".into()).into());
        }
        if self.config.log_level.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_level".into(),
                message: "Log level must not be empty".into(),
            }
            .into());
        }
        Ok(())
    }
}
