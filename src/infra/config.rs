//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/dev.toml
//!
//! Every key is optional; a missing file falls back to defaults.

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://avoindata.prh.fi/bis/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Registry endpoint; the business ID is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    timeout_ms: u64,
    user_agent: String,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        let registry = RegistryConfig::default();
        Self {
            base_url: registry.base_url,
            timeout_ms: registry.timeout_ms,
            user_agent: registry.user_agent,
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Determine config file path from the CLI flag or environment
    pub fn resolve_config_path(cli_path: Option<&str>) -> String {
        if let Some(path) = cli_path {
            return path.to_string();
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        "config/dev.toml".to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            base_url: toml_config.registry.base_url,
            timeout_ms: toml_config.registry.timeout_ms,
            user_agent: toml_config.registry.user_agent,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries TOML file first, falls back to defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(error = %reason, "config_fallback_to_defaults");
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Point the transport at another registry host (local mocks in tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url(), "https://avoindata.prh.fi/bis/v1");
        assert_eq!(config.timeout_ms(), 10_000);
        assert!(config.user_agent().starts_with("prh-company-info/"));
        assert_eq!(config.config_file(), "default");
    }

    #[test]
    fn test_resolve_config_path_from_arg() {
        assert_eq!(Config::resolve_config_path(Some("config/prod.toml")), "config/prod.toml");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let toml_config: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(toml_config.registry.base_url, DEFAULT_BASE_URL);
        assert_eq!(toml_config.registry.timeout_ms, 10_000);
    }

    #[test]
    fn test_partial_registry_section() {
        let toml_config: TomlConfig = toml::from_str("[registry]\ntimeout_ms = 2500\n").unwrap();
        assert_eq!(toml_config.registry.timeout_ms, 2500);
        assert_eq!(toml_config.registry.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builders() {
        let config = Config::default().with_base_url("http://localhost:8080").with_timeout_ms(100);
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.timeout_ms(), 100);
    }
}
