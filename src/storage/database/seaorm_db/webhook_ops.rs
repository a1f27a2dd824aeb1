use crate::core::models::Webhook;
use crate::core::tenancy::TenantScope;
use crate::storage::NewWebhook;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, webhook};
use super::types::{ERR_UNKNOWN_TENANT, SeaOrmDatabase, is_missing_row, map_write_error, to_db_id};

/// Owner column value for a domain tenant id
fn owner_column(tenant_id: Option<i64>) -> Result<Option<i32>> {
    tenant_id
        .map(|id| to_db_id(id).ok_or_else(|| GatewayError::validation(ERR_UNKNOWN_TENANT)))
        .transpose()
}

impl SeaOrmDatabase {
    /// Apply a tenant scope, or `None` if the scope cannot match any row
    fn scoped_webhooks(scope: &TenantScope) -> Option<Select<entities::Webhook>> {
        let query = entities::Webhook::find().order_by_asc(webhook::Column::Id);
        match scope {
            TenantScope::All => Some(query),
            TenantScope::Tenant(tenant_id) => {
                to_db_id(*tenant_id).map(|id| query.filter(webhook::Column::TenantId.eq(id)))
            }
        }
    }

    /// List webhooks visible in a scope
    pub async fn list_webhooks(&self, scope: &TenantScope) -> Result<Vec<Webhook>> {
        let Some(query) = Self::scoped_webhooks(scope) else {
            return Ok(vec![]);
        };

        let models = query.all(&self.db).await.map_err(GatewayError::Database)?;
        Ok(models.iter().map(webhook::Model::to_domain).collect())
    }

    /// Find webhook by ID within a scope
    pub async fn find_webhook(&self, id: i64, scope: &TenantScope) -> Result<Option<Webhook>> {
        debug!("Finding webhook by ID: {}", id);
        let (Some(id), Some(query)) = (to_db_id(id), Self::scoped_webhooks(scope)) else {
            return Ok(None);
        };

        let model = query
            .filter(webhook::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(model.map(|m| m.to_domain()))
    }

    /// Active webhooks of a tenant plus active global webhooks
    pub async fn list_active_webhooks(&self, tenant_id: Option<i64>) -> Result<Vec<Webhook>> {
        let mut owners = Condition::any().add(webhook::Column::TenantId.is_null());
        if let Some(id) = tenant_id.and_then(to_db_id) {
            owners = owners.add(webhook::Column::TenantId.eq(id));
        }

        let models = entities::Webhook::find()
            .filter(webhook::Column::IsActive.eq(true))
            .filter(owners)
            .order_by_asc(webhook::Column::Id)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(webhook::Model::to_domain).collect())
    }

    /// Create a new webhook
    pub async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Webhook> {
        debug!("Creating webhook: {}", webhook.name);

        let active_model = webhook::ActiveModel {
            id: NotSet,
            tenant_id: Set(owner_column(webhook.tenant_id)?),
            name: Set(webhook.name.clone()),
            url: Set(webhook.url.clone()),
            secret: Set(webhook.secret.clone()),
            is_active: Set(webhook.is_active),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(map_write_error)?;

        Ok(model.to_domain())
    }

    /// Replace every field of a webhook
    pub async fn update_webhook(&self, webhook: &Webhook) -> Result<Option<Webhook>> {
        debug!("Updating webhook: {}", webhook.id);
        let Some(id) = to_db_id(webhook.id) else {
            return Ok(None);
        };

        let active_model = webhook::ActiveModel {
            id: Unchanged(id),
            tenant_id: Set(owner_column(webhook.tenant_id)?),
            name: Set(webhook.name.clone()),
            url: Set(webhook.url.clone()),
            secret: Set(webhook.secret.clone()),
            is_active: Set(webhook.is_active),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Some(model.to_domain())),
            Err(e) if is_missing_row(&e) => Ok(None),
            Err(e) => Err(map_write_error(e)),
        }
    }

    /// Delete webhook
    pub async fn delete_webhook(&self, id: i64) -> Result<bool> {
        debug!("Deleting webhook: {}", id);
        let Some(id) = to_db_id(id) else {
            return Ok(false);
        };

        let result = entities::Webhook::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
