//! Tenant-scoped subscription storage

use crate::core::models::{Webhook, WebhookDraft};
use crate::core::tenancy::{CallerContext, TenantScope, authorize_tenant};
use crate::storage::{NewWebhook, Repository};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

pub const ERR_WEBHOOK_NOT_FOUND: &str = "Webhook not found";
const ERR_UNKNOWN_TENANT: &str = "Tenant does not exist";

/// Webhook CRUD filtered through the caller's tenant scope
#[derive(Clone)]
pub struct SubscriptionStore {
    repository: Arc<dyn Repository>,
    allow_unsigned: bool,
}

impl SubscriptionStore {
    pub fn new(repository: Arc<dyn Repository>, allow_unsigned: bool) -> Self {
        Self {
            repository,
            allow_unsigned,
        }
    }

    pub async fn list(&self, caller: &CallerContext) -> Result<Vec<Webhook>> {
        let scope = TenantScope::from_caller(caller)?;
        self.repository.list_webhooks(&scope).await
    }

    pub async fn list_for_tenant(
        &self,
        caller: &CallerContext,
        tenant_id: i64,
    ) -> Result<Vec<Webhook>> {
        authorize_tenant(caller, tenant_id)?;
        self.repository
            .list_webhooks(&TenantScope::Tenant(tenant_id))
            .await
    }

    pub async fn get(&self, caller: &CallerContext, id: i64) -> Result<Webhook> {
        let scope = TenantScope::from_caller(caller)?;
        self.repository
            .find_webhook(id, &scope)
            .await?
            .ok_or_else(|| GatewayError::not_found(ERR_WEBHOOK_NOT_FOUND))
    }

    /// Check a new draft without storing it and return its owning tenant
    pub async fn check(&self, caller: &CallerContext, draft: &WebhookDraft) -> Result<Option<i64>> {
        draft.validate(self.allow_unsigned)?;
        self.resolve_owner(caller, draft.tenant_id).await
    }

    pub async fn create(&self, caller: &CallerContext, draft: WebhookDraft) -> Result<Webhook> {
        let tenant_id = self.check(caller, &draft).await?;

        let webhook = self
            .repository
            .insert_webhook(NewWebhook {
                tenant_id,
                name: draft.name,
                url: draft.url,
                secret: draft.secret,
                is_active: draft.is_active,
            })
            .await?;

        info!(webhook_id = webhook.id, tenant_id = ?webhook.tenant_id, "Webhook created");
        Ok(webhook)
    }

    /// Replace a subscription in full. The path id wins over any body id.
    ///
    /// Ownership only changes when an admin names a tenant; an absent
    /// `tenant_id` keeps the current owner.
    pub async fn update(
        &self,
        caller: &CallerContext,
        id: i64,
        draft: WebhookDraft,
    ) -> Result<Webhook> {
        let existing = self.get(caller, id).await?;
        draft.validate(self.allow_unsigned)?;

        let tenant_id = match draft.tenant_id {
            Some(_) if caller.is_admin() => self.resolve_owner(caller, draft.tenant_id).await?,
            _ => existing.tenant_id,
        };

        let replacement = Webhook {
            id,
            tenant_id,
            name: draft.name,
            url: draft.url,
            secret: draft.secret,
            is_active: draft.is_active,
        };

        let webhook = self
            .repository
            .update_webhook(&replacement)
            .await?
            .ok_or_else(|| GatewayError::not_found(ERR_WEBHOOK_NOT_FOUND))?;

        info!(webhook_id = id, "Webhook updated");
        Ok(webhook)
    }

    pub async fn delete(&self, caller: &CallerContext, id: i64) -> Result<()> {
        self.get(caller, id).await?;
        if !self.repository.delete_webhook(id).await? {
            return Err(GatewayError::not_found(ERR_WEBHOOK_NOT_FOUND));
        }
        info!(webhook_id = id, "Webhook deleted");
        Ok(())
    }

    /// Owning tenant of a new or replaced subscription.
    ///
    /// Members always own what they write; admins may pick any existing
    /// tenant or none for a global subscription.
    async fn resolve_owner(
        &self,
        caller: &CallerContext,
        requested: Option<i64>,
    ) -> Result<Option<i64>> {
        if !caller.is_admin() {
            return match TenantScope::from_caller(caller)? {
                TenantScope::Tenant(id) => Ok(Some(id)),
                TenantScope::All => Ok(requested),
            };
        }

        match requested {
            Some(tenant_id) => {
                if self.repository.find_tenant(tenant_id).await?.is_none() {
                    return Err(GatewayError::validation(ERR_UNKNOWN_TENANT));
                }
                Ok(Some(tenant_id))
            }
            None => Ok(None),
        }
    }
}
