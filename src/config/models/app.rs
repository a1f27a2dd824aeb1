//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration, one field per YAML section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Outbound webhook delivery settings
    #[serde(default)]
    pub webhooks: WebhookConfig,
    /// IMAP connectivity check settings
    #[serde(default)]
    pub imap: ImapConfig,
    /// Caller identity and tenant scoping settings
    #[serde(default)]
    pub tenancy: TenancyConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}
