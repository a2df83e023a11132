//! Configuration module
//!
//! Settings are read from a TOML file (default:
//! `~/.config/fruit-vendor/config.toml`). Every section and key is optional;
//! anything missing falls back to the defaults below.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [database]
//! url = "sqlite://./vendors.db?mode=rwc"
//!
//! [logging]
//! level = "info"
//! format = "json"
//!
//! [api]
//! base_path = "/api/v1/vendors"
//!
//! [seed]
//! enabled = true
//! vendors = ["Home Fruits"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::vendors::{DEFAULT_SEED_VENDORS, VENDOR_BASE_PATH};
use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::InfraError;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fruit-vendor")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub seed: SeedConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(s: &DatabaseSettings) -> Self {
        DatabaseConfig {
            url: s.url.clone(),
            max_connections: s.max_connections,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "fruit_vendor=debug"
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Mount point of the vendor resource; also the prefix of `vendor_url`
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: VENDOR_BASE_PATH.to_string(),
        }
    }
}

/// Sample vendors inserted into an empty database at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
    pub vendors: Vec<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            vendors: DEFAULT_SEED_VENDORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Load a file the operator asked for by name. Unlike [`AppConfig::load`],
    /// a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self, InfraError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InfraError> {
        if self.server.host.trim().is_empty() {
            return Err(InfraError::InvalidConfig("server.host must not be empty".into()));
        }
        if self.server.port == 0 {
            return Err(InfraError::InvalidConfig("server.port must not be 0".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(InfraError::InvalidConfig("database.url must not be empty".into()));
        }
        let base = &self.api.base_path;
        if !base.starts_with('/') || base.len() < 2 || base.ends_with('/') {
            return Err(InfraError::InvalidConfig(format!(
                "api.base_path must start with '/' and not end with '/': {:?}",
                base
            )));
        }
        Ok(())
    }
}
