use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImapSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImapSettings::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImapSettings::TenantId).integer().null())
                    .col(
                        ColumnDef::new(ImapSettings::Enabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ImapSettings::Host).string_len(255).not_null())
                    .col(ColumnDef::new(ImapSettings::Port).integer().not_null())
                    .col(ColumnDef::new(ImapSettings::Username).string_len(255).not_null())
                    .col(ColumnDef::new(ImapSettings::Password).text().not_null())
                    .col(ColumnDef::new(ImapSettings::Tls).boolean().not_null())
                    .col(
                        ColumnDef::new(ImapSettings::IgnoreCertErrors)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImapSettings::Folder).string_len(255).not_null())
                    .col(
                        ColumnDef::new(ImapSettings::RestrictDomain)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ImapSettings::DeleteReportedCampaignEmail)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ImapSettings::ImapFreq).big_integer().not_null())
                    .col(
                        ColumnDef::new(ImapSettings::LastLogin)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ImapSettings::ModifiedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_imap_settings_tenant_id")
                            .from(ImapSettings::Table, ImapSettings::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_imap_settings_tenant_id")
                    .table(ImapSettings::Table)
                    .col(ImapSettings::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImapSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ImapSettings {
    Table,
    UserId,
    TenantId,
    Enabled,
    Host,
    Port,
    Username,
    Password,
    Tls,
    IgnoreCertErrors,
    Folder,
    RestrictDomain,
    DeleteReportedCampaignEmail,
    ImapFreq,
    LastLogin,
    ModifiedDate,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
