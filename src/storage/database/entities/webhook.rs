use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Webhook subscription database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "webhooks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning tenant, NULL for global subscriptions
    pub tenant_id: Option<i32>,

    pub name: String,
    pub url: String,
    pub secret: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id",
        on_delete = "SetNull"
    )]
    Tenant,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain webhook
    pub fn to_domain(&self) -> crate::core::models::Webhook {
        crate::core::models::Webhook {
            id: i64::from(self.id),
            tenant_id: self.tenant_id.map(i64::from),
            name: self.name.clone(),
            url: self.url.clone(),
            secret: self.secret.clone(),
            is_active: self.is_active,
        }
    }
}
