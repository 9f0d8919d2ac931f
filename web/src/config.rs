//! Application configuration loading and validation.
//!
//! Settings come from an optional TOML file, then environment overrides:
//! `TODO_API_URL` for the remote API root and `TODO_WEB_ADDR` for the listen
//! address. The API root is required; starting without one is an error.
//!
//! ```toml
//! listen_addr = "127.0.0.1:8080"
//!
//! [api]
//! base_url = "http://localhost:5006/api/TodoItems"
//!
//! [api.default_headers]
//! accept = "application/json"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use todo_core::ClientConfig;

use crate::logging::LoggingConfig;

pub const API_URL_ENV: &str = "TODO_API_URL";
pub const LISTEN_ADDR_ENV: &str = "TODO_WEB_ADDR";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error(transparent)]
    Client(#[from] todo_core::ConfigError),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    listen_addr: Option<String>,
    #[serde(default)]
    api: ApiSection,
    #[serde(default)]
    logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSection {
    base_url: Option<String>,
    #[serde(default)]
    default_headers: BTreeMap<String, String>,
}

/// Resolved settings for the web front-end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    pub api: ClientConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from `path` (when given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(ConfigError::ReadFile)?,
            None => String::new(),
        };
        Self::from_toml(&content, |key| std::env::var(key).ok())
    }

    /// Build from TOML text, reading overrides through `env`.
    pub fn from_toml(
        content: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let base_url = lookup(API_URL_ENV)
            .or(raw.api.base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "api.base_url",
            })?;

        let api = raw
            .api
            .default_headers
            .into_iter()
            .fold(ClientConfig::new(base_url), |config, (name, value)| {
                config.with_header(name, value)
            });
        api.validate()?;

        let listen_addr = lookup(LISTEN_ADDR_ENV)
            .or(raw.listen_addr)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            listen_addr,
            api,
            logging: raw.logging,
        })
    }
}
