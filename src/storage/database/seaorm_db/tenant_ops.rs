use crate::core::models::Tenant;
use crate::storage::NewTenant;
use crate::utils::error::{GatewayError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, imap_settings, tenant, webhook};
use super::types::{SeaOrmDatabase, is_missing_row, map_write_error, to_db_id};

impl SeaOrmDatabase {
    /// List all tenants by id
    pub async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let models = entities::Tenant::find()
            .order_by_asc(tenant::Column::Id)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(tenant::Model::to_domain).collect())
    }

    /// Find tenant by ID
    pub async fn find_tenant(&self, id: i64) -> Result<Option<Tenant>> {
        debug!("Finding tenant by ID: {}", id);
        let Some(id) = to_db_id(id) else {
            return Ok(None);
        };

        let model = entities::Tenant::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Find tenant by identifier
    pub async fn find_tenant_by_identifier(&self, identifier: &str) -> Result<Option<Tenant>> {
        debug!("Finding tenant by identifier: {}", identifier);

        let model = entities::Tenant::find()
            .filter(tenant::Column::TenantIdentifier.eq(identifier))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Create a new tenant
    pub async fn create_tenant(&self, tenant: &NewTenant) -> Result<Tenant> {
        debug!("Creating tenant: {}", tenant.tenant_identifier);

        let model = tenant::Model::from_new(tenant)
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain())
    }

    /// Update tenant name, identifier and guid
    pub async fn update_tenant(&self, tenant: &Tenant) -> Result<Option<Tenant>> {
        debug!("Updating tenant: {}", tenant.id);
        let Some(id) = to_db_id(tenant.id) else {
            return Ok(None);
        };

        let active_model = tenant::ActiveModel {
            id: Unchanged(id),
            guid: Set(tenant.guid.clone()),
            tenant_name: Set(tenant.tenant_name.clone()),
            tenant_identifier: Set(tenant.tenant_identifier.clone()),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(model.to_domain())),
            Err(e) if is_missing_row(&e) => Ok(None),
            Err(e) => Err(map_write_error(e)),
        }
    }

    /// Delete tenant; owned rows become global and its webhooks inactive
    pub async fn delete_tenant(&self, id: i64) -> Result<bool> {
        debug!("Deleting tenant: {}", id);
        let Some(id) = to_db_id(id) else {
            return Ok(false);
        };

        // Owned rows are orphaned in the same transaction, even where the
        // backend does not enforce ON DELETE SET NULL
        let txn = self.db.begin().await.map_err(GatewayError::Database)?;

        entities::Webhook::update_many()
            .col_expr(webhook::Column::TenantId, Expr::value(Option::<i32>::None))
            .col_expr(webhook::Column::IsActive, Expr::value(false))
            .filter(webhook::Column::TenantId.eq(id))
            .exec(&txn)
            .await
            .map_err(GatewayError::Database)?;
        entities::ImapSettings::update_many()
            .col_expr(imap_settings::Column::TenantId, Expr::value(Option::<i32>::None))
            .filter(imap_settings::Column::TenantId.eq(id))
            .exec(&txn)
            .await
            .map_err(GatewayError::Database)?;

        let result = entities::Tenant::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(GatewayError::Database)?;

        txn.commit().await.map_err(GatewayError::Database)?;
        Ok(result.rows_affected > 0)
    }
}
