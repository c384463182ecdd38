use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `accounts` table and its columns.
#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    Platform,
    Email,
    Username,
    TypeOfGigs,
    Currency,
    Status,
    AccountLevel,
    SuccessRate,
    BrowserType,
    Proxy,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Accounts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Accounts::Platform).string().not_null())
                    .col(ColumnDef::new(Accounts::Email).string().not_null())
                    .col(ColumnDef::new(Accounts::Username).string().not_null())
                    .col(ColumnDef::new(Accounts::TypeOfGigs).text())
                    .col(ColumnDef::new(Accounts::Currency).string().not_null())
                    .col(ColumnDef::new(Accounts::Status).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::AccountLevel)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Accounts::SuccessRate).double())
                    .col(ColumnDef::new(Accounts::BrowserType).string())
                    .col(ColumnDef::new(Accounts::Proxy).string())
                    .col(ColumnDef::new(Accounts::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Accounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Accounts::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accounts_created_by")
                            .from(Accounts::Table, Accounts::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One account per email per platform.
        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_platform_email_unique")
                    .table(Accounts::Table)
                    .col(Accounts::Platform)
                    .col(Accounts::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}
