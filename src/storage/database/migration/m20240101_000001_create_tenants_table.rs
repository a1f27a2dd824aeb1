use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tenants::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tenants::Guid).string_len(36).not_null())
                    .col(ColumnDef::new(Tenants::TenantName).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Tenants::TenantIdentifier)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs identifier uniqueness against concurrent registrations
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tenants_tenant_identifier")
                    .table(Tenants::Table)
                    .col(Tenants::TenantIdentifier)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
    Guid,
    TenantName,
    TenantIdentifier,
}
