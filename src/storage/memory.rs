//! In-process repository
//!
//! Backs tests and local development. All invariants of the database backend
//! hold here as well, checked atomically under one lock.

use super::{NewTenant, NewWebhook, Repository};
use crate::core::models::tenant::ERR_TENANT_IDENTIFIER_IN_USE;
use crate::core::models::{ImapSettings, Tenant, Webhook};
use crate::core::tenancy::TenantScope;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct MemoryState {
    tenants: BTreeMap<i64, Tenant>,
    webhooks: BTreeMap<i64, Webhook>,
    imap_settings: BTreeMap<i64, ImapSettings>,
    last_tenant_id: i64,
    last_webhook_id: i64,
}

impl MemoryState {
    fn identifier_taken(&self, identifier: &str, except: Option<i64>) -> bool {
        self.tenants
            .values()
            .any(|t| t.tenant_identifier == identifier && Some(t.id) != except)
    }
}

/// Repository keeping every record in memory
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        Ok(self.state.read().tenants.values().cloned().collect())
    }

    async fn find_tenant(&self, id: i64) -> Result<Option<Tenant>> {
        Ok(self.state.read().tenants.get(&id).cloned())
    }

    async fn find_tenant_by_identifier(&self, identifier: &str) -> Result<Option<Tenant>> {
        Ok(self
            .state
            .read()
            .tenants
            .values()
            .find(|t| t.tenant_identifier == identifier)
            .cloned())
    }

    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant> {
        let mut state = self.state.write();
        if state.identifier_taken(&tenant.tenant_identifier, None) {
            return Err(GatewayError::conflict(ERR_TENANT_IDENTIFIER_IN_USE));
        }

        state.last_tenant_id += 1;
        let stored = Tenant {
            id: state.last_tenant_id,
            guid: tenant.guid,
            tenant_name: tenant.tenant_name,
            tenant_identifier: tenant.tenant_identifier,
        };
        state.tenants.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_tenant(&self, tenant: &Tenant) -> Result<Option<Tenant>> {
        let mut state = self.state.write();
        if !state.tenants.contains_key(&tenant.id) {
            return Ok(None);
        }
        if state.identifier_taken(&tenant.tenant_identifier, Some(tenant.id)) {
            return Err(GatewayError::conflict(ERR_TENANT_IDENTIFIER_IN_USE));
        }
        state.tenants.insert(tenant.id, tenant.clone());
        Ok(Some(tenant.clone()))
    }

    async fn delete_tenant(&self, id: i64) -> Result<bool> {
        let mut state = self.state.write();
        if state.tenants.remove(&id).is_none() {
            return Ok(false);
        }

        // Orphaned webhooks are switched off so broadcasts to other
        // tenants never reach them
        for webhook in state.webhooks.values_mut() {
            if webhook.tenant_id == Some(id) {
                webhook.tenant_id = None;
                webhook.is_active = false;
            }
        }
        for settings in state.imap_settings.values_mut() {
            if settings.tenant_id == Some(id) {
                settings.tenant_id = None;
            }
        }
        Ok(true)
    }

    async fn list_webhooks(&self, scope: &TenantScope) -> Result<Vec<Webhook>> {
        Ok(self
            .state
            .read()
            .webhooks
            .values()
            .filter(|w| scope.permits(w.tenant_id))
            .cloned()
            .collect())
    }

    async fn find_webhook(&self, id: i64, scope: &TenantScope) -> Result<Option<Webhook>> {
        Ok(self
            .state
            .read()
            .webhooks
            .get(&id)
            .filter(|w| scope.permits(w.tenant_id))
            .cloned())
    }

    async fn list_active_webhooks(&self, tenant_id: Option<i64>) -> Result<Vec<Webhook>> {
        Ok(self
            .state
            .read()
            .webhooks
            .values()
            .filter(|w| w.is_active && (w.tenant_id.is_none() || w.tenant_id == tenant_id))
            .cloned()
            .collect())
    }

    async fn insert_webhook(&self, webhook: NewWebhook) -> Result<Webhook> {
        let mut state = self.state.write();
        state.last_webhook_id += 1;
        let stored = Webhook {
            id: state.last_webhook_id,
            tenant_id: webhook.tenant_id,
            name: webhook.name,
            url: webhook.url,
            secret: webhook.secret,
            is_active: webhook.is_active,
        };
        state.webhooks.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_webhook(&self, webhook: &Webhook) -> Result<Option<Webhook>> {
        let mut state = self.state.write();
        match state.webhooks.get_mut(&webhook.id) {
            Some(slot) => {
                *slot = webhook.clone();
                Ok(Some(webhook.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_webhook(&self, id: i64) -> Result<bool> {
        Ok(self.state.write().webhooks.remove(&id).is_some())
    }

    async fn find_imap_settings(&self, user_id: i64) -> Result<Option<ImapSettings>> {
        Ok(self.state.read().imap_settings.get(&user_id).cloned())
    }

    async fn list_imap_settings(&self, scope: &TenantScope) -> Result<Vec<ImapSettings>> {
        Ok(self
            .state
            .read()
            .imap_settings
            .values()
            .filter(|s| scope.permits(s.tenant_id))
            .cloned()
            .collect())
    }

    async fn upsert_imap_settings(&self, settings: &ImapSettings) -> Result<ImapSettings> {
        self.state
            .write()
            .imap_settings
            .insert(settings.user_id, settings.clone());
        Ok(settings.clone())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
