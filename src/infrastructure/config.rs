// src/infrastructure/config.rs
use crate::constants::{DEFAULT_HOSTNAME, DEFAULT_PORT, REQUEST_TIMEOUT_SECS, RUN_WINDOW_SECS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// TOML configuration for the proxy server
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_hostname")]
    pub hostname: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_run_window_secs")]
    pub run_window_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

// Default value functions
fn default_hostname() -> String { DEFAULT_HOSTNAME.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_run_window_secs() -> u64 { RUN_WINDOW_SECS }
fn default_request_timeout_secs() -> u64 { REQUEST_TIMEOUT_SECS }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: default_hostname(),
            port: default_port(),
            run_window_secs: default_run_window_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: ServerConfig = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file or default values
    pub fn with_overrides(mut self, hostname: Option<String>, port: Option<u16>) -> Self {
        if let Some(hostname) = hostname {
            self.hostname = hostname;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn run_window(&self) -> Duration {
        Duration::from_secs(self.run_window_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_default_config_when_created_then_has_expected_values() {
        let config = ServerConfig::default();

        assert_eq!(config.hostname, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.run_window(), Duration::from_secs(600));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn given_partial_toml_when_loading_then_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("zeppelinsrv.toml");
        std::fs::write(&config_path, "hostname = \"zeppelin.internal:8080\"\nport = 9090\n").unwrap();

        let config = ServerConfig::load(&config_path).unwrap();

        assert_eq!(config.hostname, "zeppelin.internal:8080");
        assert_eq!(config.port, 9090);
        assert_eq!(config.run_window_secs, RUN_WINDOW_SECS);
    }

    #[test]
    fn given_config_when_saved_and_loaded_then_matches() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("zeppelinsrv.toml");
        let config = ServerConfig {
            run_window_secs: 5,
            ..ServerConfig::default()
        };

        config.save(&config_path).unwrap();
        let loaded = ServerConfig::load(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn given_missing_file_when_creating_default_then_writes_it() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("zeppelinsrv.toml");

        let created = ServerConfig::create_default(&config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(ServerConfig::load(&config_path).unwrap(), created);
    }

    #[test]
    fn given_overrides_when_applied_then_replace_file_values() {
        let config = ServerConfig::default().with_overrides(Some("remote".to_string()), None);

        assert_eq!(config.hostname, "remote");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        std::fs::write(&config_path, "port = \"not a number\"").unwrap();

        assert!(ServerConfig::load(&config_path).is_err());
    }
}
