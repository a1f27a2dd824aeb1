//! Tenant registration with identifier uniqueness

use crate::core::models::tenant::ERR_TENANT_IDENTIFIER_IN_USE;
use crate::core::models::{Tenant, TenantDraft};
use crate::storage::{NewTenant, Repository};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub const ERR_TENANT_NOT_FOUND: &str = "Tenant not found";
pub const ERR_TENANT_ID_MISMATCH: &str = "Error: /:id and tenant_id mismatch";

/// Creates, updates and removes tenants
#[derive(Clone)]
pub struct TenantGuard {
    repository: Arc<dyn Repository>,
}

impl TenantGuard {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Tenant>> {
        self.repository.list_tenants().await
    }

    pub async fn get(&self, id: i64) -> Result<Tenant> {
        self.repository
            .find_tenant(id)
            .await?
            .ok_or_else(|| GatewayError::not_found(ERR_TENANT_NOT_FOUND))
    }

    /// Fail with `Conflict` if another tenant already uses `identifier`.
    ///
    /// `current_id` is the tenant being updated, whose own identifier is not a
    /// collision.
    pub async fn ensure_identifier_available(
        &self,
        identifier: &str,
        current_id: Option<i64>,
    ) -> Result<()> {
        match self.repository.find_tenant_by_identifier(identifier).await? {
            Some(existing) if Some(existing.id) != current_id => {
                debug!(
                    tenant_identifier = %identifier,
                    existing_id = existing.id,
                    "Tenant identifier collision"
                );
                Err(GatewayError::conflict(ERR_TENANT_IDENTIFIER_IN_USE))
            }
            _ => Ok(()),
        }
    }

    pub async fn register(&self, draft: TenantDraft) -> Result<Tenant> {
        draft.validate()?;
        self.ensure_identifier_available(&draft.tenant_identifier, None)
            .await?;

        let tenant = self
            .repository
            .insert_tenant(NewTenant {
                guid: draft.guid_or_generate(),
                tenant_name: draft.tenant_name,
                tenant_identifier: draft.tenant_identifier,
            })
            .await?;

        info!(tenant_id = tenant.id, tenant_identifier = %tenant.tenant_identifier, "Tenant created");
        Ok(tenant)
    }

    /// Replace a tenant's name and identifier.
    ///
    /// The uniqueness lookup only runs when the identifier changes; the
    /// storage constraint still backs it either way.
    pub async fn update(&self, id: i64, draft: TenantDraft) -> Result<Tenant> {
        if draft.id.is_some_and(|body_id| body_id != id) {
            return Err(GatewayError::bad_request(ERR_TENANT_ID_MISMATCH));
        }

        let existing = self.get(id).await?;
        draft.validate()?;

        if existing.tenant_identifier != draft.tenant_identifier {
            self.ensure_identifier_available(&draft.tenant_identifier, Some(id))
                .await?;
        }

        let guid = match draft.guid {
            Some(guid) if !guid.is_empty() => guid,
            _ => existing.guid,
        };
        let updated = Tenant {
            id,
            guid,
            tenant_name: draft.tenant_name,
            tenant_identifier: draft.tenant_identifier,
        };

        let tenant = self
            .repository
            .update_tenant(&updated)
            .await?
            .ok_or_else(|| GatewayError::not_found(ERR_TENANT_NOT_FOUND))?;

        info!(tenant_id = id, "Tenant updated");
        Ok(tenant)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.repository.delete_tenant(id).await? {
            return Err(GatewayError::not_found(ERR_TENANT_NOT_FOUND));
        }
        info!(tenant_id = id, "Tenant deleted");
        Ok(())
    }
}
