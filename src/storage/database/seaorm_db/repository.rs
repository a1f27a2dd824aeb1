use crate::core::models::{ImapSettings, Tenant, Webhook};
use crate::core::tenancy::TenantScope;
use crate::storage::{NewTenant, NewWebhook, Repository};
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::{DatabaseBackendType, SeaOrmDatabase};

#[async_trait]
impl Repository for SeaOrmDatabase {
    async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        SeaOrmDatabase::list_tenants(self).await
    }

    async fn find_tenant(&self, id: i64) -> Result<Option<Tenant>> {
        SeaOrmDatabase::find_tenant(self, id).await
    }

    async fn find_tenant_by_identifier(&self, identifier: &str) -> Result<Option<Tenant>> {
        SeaOrmDatabase::find_tenant_by_identifier(self, identifier).await
    }

    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant> {
        self.create_tenant(&tenant).await
    }

    async fn update_tenant(&self, tenant: &Tenant) -> Result<Option<Tenant>> {
        SeaOrmDatabase::update_tenant(self, tenant).await
    }

    async fn delete_tenant(&self, id: i64) -> Result<bool> {
        SeaOrmDatabase::delete_tenant(self, id).await
    }

    async fn list_webhooks(&self, scope: &TenantScope) -> Result<Vec<Webhook>> {
        SeaOrmDatabase::list_webhooks(self, scope).await
    }

    async fn find_webhook(&self, id: i64, scope: &TenantScope) -> Result<Option<Webhook>> {
        SeaOrmDatabase::find_webhook(self, id, scope).await
    }

    async fn list_active_webhooks(&self, tenant_id: Option<i64>) -> Result<Vec<Webhook>> {
        SeaOrmDatabase::list_active_webhooks(self, tenant_id).await
    }

    async fn insert_webhook(&self, webhook: NewWebhook) -> Result<Webhook> {
        self.create_webhook(&webhook).await
    }

    async fn update_webhook(&self, webhook: &Webhook) -> Result<Option<Webhook>> {
        SeaOrmDatabase::update_webhook(self, webhook).await
    }

    async fn delete_webhook(&self, id: i64) -> Result<bool> {
        SeaOrmDatabase::delete_webhook(self, id).await
    }

    async fn find_imap_settings(&self, user_id: i64) -> Result<Option<ImapSettings>> {
        SeaOrmDatabase::find_imap_settings(self, user_id).await
    }

    async fn list_imap_settings(&self, scope: &TenantScope) -> Result<Vec<ImapSettings>> {
        SeaOrmDatabase::list_imap_settings(self, scope).await
    }

    async fn upsert_imap_settings(&self, settings: &ImapSettings) -> Result<ImapSettings> {
        SeaOrmDatabase::upsert_imap_settings(self, settings).await
    }

    fn backend(&self) -> &'static str {
        match self.backend_type {
            DatabaseBackendType::SQLite => "sqlite",
            DatabaseBackendType::PostgreSQL => "postgres",
        }
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }
}
