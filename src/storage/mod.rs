//! Storage layer for the service
//!
//! Handlers and core services depend on the [`Repository`] trait only. Two
//! backends implement it: a SeaORM database and an in-process map.

/// Database storage module
pub mod database;
/// In-process storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::models::{ImapSettings, Tenant, Webhook};
use crate::core::tenancy::TenantScope;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

pub use database::SeaOrmRepository;
pub use memory::InMemoryRepository;

/// URL that selects the in-process backend
pub const MEMORY_URL: &str = "memory://";

/// Fields of a tenant about to be inserted
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub guid: String,
    pub tenant_name: String,
    pub tenant_identifier: String,
}

/// Fields of a webhook about to be inserted
#[derive(Debug, Clone)]
pub struct NewWebhook {
    pub tenant_id: Option<i64>,
    pub name: String,
    pub url: String,
    pub secret: String,
    pub is_active: bool,
}

/// Persistence of tenants, webhooks and IMAP settings.
///
/// Implementations enforce tenant identifier uniqueness themselves and report
/// a collision as `Conflict`. Deleting a tenant turns its webhooks and IMAP
/// settings into global rows.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn list_tenants(&self) -> Result<Vec<Tenant>>;
    async fn find_tenant(&self, id: i64) -> Result<Option<Tenant>>;
    async fn find_tenant_by_identifier(&self, identifier: &str) -> Result<Option<Tenant>>;
    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant>;
    /// `None` when no tenant has this id
    async fn update_tenant(&self, tenant: &Tenant) -> Result<Option<Tenant>>;
    /// `false` when no tenant has this id
    async fn delete_tenant(&self, id: i64) -> Result<bool>;

    async fn list_webhooks(&self, scope: &TenantScope) -> Result<Vec<Webhook>>;
    async fn find_webhook(&self, id: i64, scope: &TenantScope) -> Result<Option<Webhook>>;
    /// Active webhooks owned by `tenant_id` plus every active global webhook
    async fn list_active_webhooks(&self, tenant_id: Option<i64>) -> Result<Vec<Webhook>>;
    async fn insert_webhook(&self, webhook: NewWebhook) -> Result<Webhook>;
    async fn update_webhook(&self, webhook: &Webhook) -> Result<Option<Webhook>>;
    async fn delete_webhook(&self, id: i64) -> Result<bool>;

    async fn find_imap_settings(&self, user_id: i64) -> Result<Option<ImapSettings>>;
    async fn list_imap_settings(&self, scope: &TenantScope) -> Result<Vec<ImapSettings>>;
    /// Insert or replace the record of `settings.user_id`
    async fn upsert_imap_settings(&self, settings: &ImapSettings) -> Result<ImapSettings>;

    /// Name of the backend, for diagnostics
    fn backend(&self) -> &'static str;
    async fn health_check(&self) -> Result<()>;
}

/// Storage health as reported by `/health`
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    pub overall: bool,
    pub backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StorageHealthStatus {
    pub async fn probe(repository: &dyn Repository) -> Self {
        match repository.health_check().await {
            Ok(()) => Self {
                overall: true,
                backend: repository.backend(),
                error: None,
            },
            Err(e) => {
                warn!(backend = repository.backend(), error = %e, "Storage health check failed");
                Self {
                    overall: false,
                    backend: repository.backend(),
                    error: Some(e.public_message()),
                }
            }
        }
    }
}

/// Open the configured backend, running migrations when enabled
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn Repository>> {
    if config.database.url == MEMORY_URL {
        info!("Using in-memory storage");
        return Ok(Arc::new(InMemoryRepository::new()));
    }

    let repository = SeaOrmRepository::new(&config.database).await?;
    if config.database.run_migrations {
        repository.migrate().await?;
    }
    Ok(Arc::new(repository))
}
