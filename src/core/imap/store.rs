//! Per-user IMAP settings storage

use crate::core::models::ImapSettings;
use crate::core::tenancy::{CallerContext, TenantScope, authorize_tenant};
use crate::storage::Repository;
use crate::utils::error::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// IMAP settings read and written on behalf of a caller
#[derive(Clone)]
pub struct ImapStore {
    repository: Arc<dyn Repository>,
}

impl ImapStore {
    pub fn new(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }

    /// The caller's own settings, as a list of zero or one records
    pub async fn get(&self, caller: &CallerContext) -> Result<Vec<ImapSettings>> {
        Ok(self
            .repository
            .find_imap_settings(caller.user_id)
            .await?
            .into_iter()
            .collect())
    }

    pub async fn list_for_tenant(
        &self,
        caller: &CallerContext,
        tenant_id: i64,
    ) -> Result<Vec<ImapSettings>> {
        authorize_tenant(caller, tenant_id)?;
        self.repository
            .list_imap_settings(&TenantScope::Tenant(tenant_id))
            .await
    }

    /// Replace the caller's settings.
    ///
    /// Ownership always comes from the caller, and an empty password keeps
    /// the stored one.
    pub async fn save(
        &self,
        caller: &CallerContext,
        mut settings: ImapSettings,
    ) -> Result<ImapSettings> {
        settings.user_id = caller.user_id;
        settings.tenant_id = caller.tenant_id;

        if settings.password.is_empty() {
            if let Some(existing) = self.repository.find_imap_settings(caller.user_id).await? {
                settings.password = existing.password;
            }
        }

        settings.validate()?;
        settings.modified_date = Utc::now();

        let saved = self.repository.upsert_imap_settings(&settings).await?;
        info!(user_id = caller.user_id, tenant_id = ?caller.tenant_id, "IMAP settings saved");
        Ok(saved)
    }
}
