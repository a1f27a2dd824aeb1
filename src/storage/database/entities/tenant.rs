use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tenant database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// External-facing UUID
    pub guid: String,

    pub tenant_name: String,

    /// Tenant identifier (unique)
    #[sea_orm(unique)]
    pub tenant_identifier: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::webhook::Entity")]
    Webhooks,

    #[sea_orm(has_many = "super::imap_settings::Entity")]
    ImapSettings,
}

impl Related<super::webhook::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Webhooks.def()
    }
}

impl Related<super::imap_settings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImapSettings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain tenant
    pub fn to_domain(&self) -> crate::core::models::Tenant {
        crate::core::models::Tenant {
            id: i64::from(self.id),
            guid: self.guid.clone(),
            tenant_name: self.tenant_name.clone(),
            tenant_identifier: self.tenant_identifier.clone(),
        }
    }

    /// Active model for a new tenant; the id is assigned by the database
    pub fn from_new(tenant: &crate::storage::NewTenant) -> ActiveModel {
        ActiveModel {
            id: sea_orm::NotSet,
            guid: Set(tenant.guid.clone()),
            tenant_name: Set(tenant.tenant_name.clone()),
            tenant_identifier: Set(tenant.tenant_identifier.clone()),
        }
    }
}
