use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `withdraws` table and its columns.
#[derive(DeriveIden)]
enum Withdraws {
    Table,
    Id,
    AccountId,
    Amount,
    WithdrawDate,
    PaymentMeans,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Withdraws::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Withdraws::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Withdraws::AccountId).uuid().not_null())
                    .col(ColumnDef::new(Withdraws::Amount).double().not_null())
                    .col(ColumnDef::new(Withdraws::WithdrawDate).date().not_null())
                    .col(ColumnDef::new(Withdraws::PaymentMeans).string().not_null())
                    .col(ColumnDef::new(Withdraws::Notes).text())
                    .col(
                        ColumnDef::new(Withdraws::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdraws_account_id")
                            .from(Withdraws::Table, Withdraws::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Withdraws::Table).to_owned())
            .await
    }
}
