//! Outbound webhook delivery configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Webhook delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Timeout for a single delivery attempt, in seconds
    #[serde(default = "default_webhook_timeout")]
    pub timeout_seconds: u64,
    /// Accept subscriptions without a secret and deliver them unsigned
    #[serde(default)]
    pub allow_unsigned: bool,
    /// User-Agent sent with every delivery
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_webhook_timeout(),
            allow_unsigned: false,
            user_agent: default_user_agent(),
        }
    }
}

impl WebhookConfig {
    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("Webhook timeout cannot be 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("Webhook user agent cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("tenant-webhooks/{}", env!("CARGO_PKG_VERSION"))
}
