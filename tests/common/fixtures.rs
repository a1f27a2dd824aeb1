//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use serde_json::{Value, json};
use tenant_webhooks::core::models::{ImapSettings, TenantDraft, WebhookDraft};
use uuid::Uuid;

/// Secret used by every fixture webhook
pub const TEST_SECRET: &str = "whsec_integration";

/// Factory for tenant drafts
pub struct TenantFactory;

impl TenantFactory {
    /// A tenant with a unique identifier
    pub fn create() -> TenantDraft {
        let suffix = &Uuid::new_v4().simple().to_string()[..8];
        TenantDraft::new(format!("Tenant {suffix}"), format!("tenant-{suffix}"))
    }

    /// A tenant with a specific identifier
    pub fn with_identifier(identifier: &str) -> TenantDraft {
        TenantDraft::new(format!("{identifier} Inc."), identifier)
    }

    /// Request body for the tenant API
    pub fn json(identifier: &str) -> Value {
        json!({
            "tenant_name": format!("{identifier} Inc."),
            "tenant_identifier": identifier,
        })
    }
}

/// Factory for webhook drafts
pub struct WebhookFactory;

impl WebhookFactory {
    /// An active, signed webhook pointing at `url`
    pub fn create(url: &str) -> WebhookDraft {
        WebhookDraft::new("integration hook", url, TEST_SECRET)
    }

    /// Request body for the webhook API
    pub fn json(url: &str) -> Value {
        json!({
            "name": "integration hook",
            "url": url,
            "secret": TEST_SECRET,
            "is_active": true,
        })
    }
}

/// Factory for IMAP settings
pub struct ImapFactory;

impl ImapFactory {
    /// Enabled settings with every connection field filled
    pub fn enabled() -> ImapSettings {
        ImapSettings {
            enabled: true,
            host: "imap.example.com".to_string(),
            port: 993,
            username: "reports@example.com".to_string(),
            password: "hunter2".to_string(),
            tls: true,
            ..Default::default()
        }
    }

    /// Request body for the IMAP API
    pub fn json() -> Value {
        json!({
            "enabled": true,
            "host": "imap.example.com",
            "port": 993,
            "username": "reports@example.com",
            "password": "hunter2",
            "tls": true,
        })
    }
}
