//! Configuration loading for the sentiment service connection.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sentic.toml";

const ANALYZE_PATH: &str = "/api/v1/analyze";

/// Connection settings for the sentiment analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServiceConfig {
    /// Base URL of the service (without the `/api/v1/analyze` suffix)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file. Keys missing from the file keep their defaults.
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file {}", config_path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config if the file exists, falling back to defaults otherwise.
    ///
    /// A file that exists but cannot be read or parsed is logged and ignored.
    pub fn load_or_default(config_path: &Path) -> Self {
        if !config_path.exists() {
            log::info!("No config file at {}, using defaults", config_path.display());
            return Self::default();
        }
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ANALYZE_PATH)
    }

    /// URL of the service health check.
    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
