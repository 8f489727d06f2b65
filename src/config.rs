//! Configuration loading from TOML.
//!
//! Reads `config.toml` (or the file named by `BETBOOK_CONFIG`) and
//! deserializes into strongly-typed structs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

use crate::types::BetbookError;

/// Env var naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "BETBOOK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSection,
    pub server: ServerConfig,
    pub entry: EntryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSection {
    pub name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EntryConfig {
    /// Station labels offered on the entry form, e.g. `Station-001-2D`.
    pub stations: Vec<String>,
}

fn default_currency() -> String {
    "VND".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Invalid config file: {path}"))
    }

    /// Load from `BETBOOK_CONFIG`, falling back to `config.toml`.
    pub fn load_default() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(&path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BetbookError> {
        if self.entry.stations.is_empty() {
            return Err(BetbookError::Config("entry.stations must not be empty".into()));
        }
        if let Some(blank) = self.entry.stations.iter().position(|s| s.trim().is_empty()) {
            return Err(BetbookError::Config(format!("entry.stations[{blank}] is blank")));
        }
        if self.server.port == 0 {
            return Err(BetbookError::Config("server.port must be non-zero".into()));
        }
        Ok(())
    }

    /// Address the API server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .with_context(|| format!("Invalid server address: {addr}"))
    }
}
