use crate::core::models::ImapSettings;
use crate::core::tenancy::TenantScope;
use crate::utils::error::{GatewayError, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, imap_settings};
use super::types::{ERR_UNKNOWN_TENANT, SeaOrmDatabase, map_write_error, to_db_id};

impl SeaOrmDatabase {
    /// Find the IMAP settings of a user
    pub async fn find_imap_settings(&self, user_id: i64) -> Result<Option<ImapSettings>> {
        debug!("Finding IMAP settings for user: {}", user_id);

        let model = entities::ImapSettings::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// List IMAP settings visible in a scope
    pub async fn list_imap_settings(&self, scope: &TenantScope) -> Result<Vec<ImapSettings>> {
        let mut query = entities::ImapSettings::find().order_by_asc(imap_settings::Column::UserId);
        if let TenantScope::Tenant(tenant_id) = scope {
            let Some(tenant_id) = to_db_id(*tenant_id) else {
                return Ok(vec![]);
            };
            query = query.filter(imap_settings::Column::TenantId.eq(tenant_id));
        }

        let models = query.all(&self.db).await.map_err(GatewayError::Database)?;
        Ok(models.iter().map(imap_settings::Model::to_domain).collect())
    }

    /// Insert or replace the settings row of `settings.user_id` in one statement
    pub async fn upsert_imap_settings(&self, settings: &ImapSettings) -> Result<ImapSettings> {
        debug!("Saving IMAP settings for user: {}", settings.user_id);

        let tenant_id = settings
            .tenant_id
            .map(|id| to_db_id(id).ok_or_else(|| GatewayError::validation(ERR_UNKNOWN_TENANT)))
            .transpose()?;
        let active_model = imap_settings::Model::from_domain(settings, tenant_id);

        entities::ImapSettings::insert(active_model)
            .on_conflict(
                OnConflict::column(imap_settings::Column::UserId)
                    .update_columns([
                        imap_settings::Column::TenantId,
                        imap_settings::Column::Enabled,
                        imap_settings::Column::Host,
                        imap_settings::Column::Port,
                        imap_settings::Column::Username,
                        imap_settings::Column::Password,
                        imap_settings::Column::Tls,
                        imap_settings::Column::IgnoreCertErrors,
                        imap_settings::Column::Folder,
                        imap_settings::Column::RestrictDomain,
                        imap_settings::Column::DeleteReportedCampaignEmail,
                        imap_settings::Column::ImapFreq,
                        imap_settings::Column::LastLogin,
                        imap_settings::Column::ModifiedDate,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(settings.clone())
    }
}
