use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// IMAP settings database model, one row per user
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "imap_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    pub tenant_id: Option<i32>,
    pub enabled: bool,
    pub host: String,
    pub port: i32,
    pub username: String,
    pub password: String,
    pub tls: bool,
    pub ignore_cert_errors: bool,
    pub folder: String,
    pub restrict_domain: String,
    pub delete_reported_campaign_email: bool,
    pub imap_freq: i64,
    pub last_login: Option<DateTimeUtc>,
    pub modified_date: DateTimeUtc,
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
    /// Convert SeaORM model to domain settings
    pub fn to_domain(&self) -> crate::core::models::ImapSettings {
        use crate::core::models::DEFAULT_IMAP_FREQ;

        crate::core::models::ImapSettings {
            user_id: self.user_id,
            tenant_id: self.tenant_id.map(i64::from),
            enabled: self.enabled,
            host: self.host.clone(),
            port: u16::try_from(self.port).unwrap_or_default(),
            username: self.username.clone(),
            password: self.password.clone(),
            tls: self.tls,
            ignore_cert_errors: self.ignore_cert_errors,
            folder: self.folder.clone(),
            restrict_domain: self.restrict_domain.clone(),
            delete_reported_campaign_email: self.delete_reported_campaign_email,
            imap_freq: u32::try_from(self.imap_freq).unwrap_or(DEFAULT_IMAP_FREQ),
            last_login: self.last_login,
            modified_date: self.modified_date,
        }
    }

    /// Convert domain settings to a SeaORM active model
    pub fn from_domain(
        settings: &crate::core::models::ImapSettings,
        tenant_id: Option<i32>,
    ) -> ActiveModel {
        ActiveModel {
            user_id: Set(settings.user_id),
            tenant_id: Set(tenant_id),
            enabled: Set(settings.enabled),
            host: Set(settings.host.clone()),
            port: Set(i32::from(settings.port)),
            username: Set(settings.username.clone()),
            password: Set(settings.password.clone()),
            tls: Set(settings.tls),
            ignore_cert_errors: Set(settings.ignore_cert_errors),
            folder: Set(settings.folder.clone()),
            restrict_domain: Set(settings.restrict_domain.clone()),
            delete_reported_campaign_email: Set(settings.delete_reported_campaign_email),
            imap_freq: Set(i64::from(settings.imap_freq)),
            last_login: Set(settings.last_login),
            modified_date: Set(settings.modified_date),
        }
    }
}
