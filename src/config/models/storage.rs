//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite://...`, `postgres://...` or `memory://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Run pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            run_migrations: default_run_migrations(),
        }
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL is required".to_string());
        }
        if self.max_connections == 0 {
            return Err("Database max_connections cannot be 0".to_string());
        }
        Ok(())
    }

    /// Whether the URL points at SQLite
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite")
    }
}

fn default_database_url() -> String {
    "sqlite://data/tenant-webhooks.db?mode=rwc".to_string()
}

fn default_run_migrations() -> bool {
    true
}
