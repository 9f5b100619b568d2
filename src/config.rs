//! Configuration module
//!
//! Settings come from a TOML file (`~/.config/accounts-service/config.toml`
//! by default, overridable via the `ACCOUNTS_CONFIG` environment variable).
//! Every section falls back to defaults when the file or a key is missing.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// HTTP server bind settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
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
        }
    }
}

/// Database settings: a SQLite file path, or a full connection URL which
/// takes precedence (e.g. to point at PostgreSQL).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: String,
    pub url: Option<String>,
}

impl DatabaseSettings {
    /// Full SeaORM connection URL.
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "./accounts.db".to_string(),
            url: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Security settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

/// Default config location: `~/.config/accounts-service/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("accounts-service")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_sections_are_missing() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(
            cfg.database.connection_url(),
            "sqlite://./accounts.db?mode=rwc"
        );
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.security.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn file_values_override_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9090

            [database]
            url = "postgres://app:secret@db/accounts"

            [logging]
            level = "debug"

            [security]
            bcrypt_cost = 10
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.address(), "127.0.0.1:9090");
        assert_eq!(
            cfg.database.connection_url(),
            "postgres://app:secret@db/accounts"
        );
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.security.bcrypt_cost, 10);
    }
}
