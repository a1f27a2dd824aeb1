//! Configuration management for the service
//!
//! Configuration is read from a YAML file, then overridden by environment
//! variables, then validated.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let app: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using the given variable lookup
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("APP_HOST") {
            self.app.server.host = host;
        }
        if let Some(port) = lookup("APP_PORT") {
            self.app.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid APP_PORT: {}", e)))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.app.storage.database.url = url;
        }
        if let Some(timeout) = lookup("WEBHOOK_TIMEOUT_SECONDS") {
            self.app.webhooks.timeout_seconds = timeout.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid WEBHOOK_TIMEOUT_SECONDS: {}", e))
            })?;
        }
        if let Some(flag) = lookup("WEBHOOK_ALLOW_UNSIGNED") {
            self.app.webhooks.allow_unsigned = parse_flag("WEBHOOK_ALLOW_UNSIGNED", &flag)?;
        }
        if let Some(flag) = lookup("TRUST_IDENTITY_HEADERS") {
            self.app.tenancy.trust_identity_headers = parse_flag("TRUST_IDENTITY_HEADERS", &flag)?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.app.logging.format = format.parse().map_err(GatewayError::Config)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get webhook delivery configuration
    pub fn webhooks(&self) -> &WebhookConfig {
        &self.app.webhooks
    }

    /// Get IMAP configuration
    pub fn imap(&self) -> &ImapConfig {
        &self.app.imap
    }

    /// Get tenancy configuration
    pub fn tenancy(&self) -> &TenancyConfig {
        &self.app.tenancy
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.app
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.app
            .storage
            .database
            .validate()
            .map_err(|e| GatewayError::Config(format!("Storage config error: {}", e)))?;

        self.app
            .webhooks
            .validate()
            .map_err(|e| GatewayError::Config(format!("Webhook config error: {}", e)))?;

        if self.app.imap.connect_timeout_seconds == 0 {
            return Err(GatewayError::Config(
                "IMAP config error: connect timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(GatewayError::Config(format!(
            "Invalid {}: expected a boolean, got {}",
            name, other
        ))),
    }
}
