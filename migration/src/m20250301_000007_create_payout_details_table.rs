use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `payout_details` table and its columns.
#[derive(DeriveIden)]
enum PayoutDetails {
    Table,
    Id,
    AccountId,
    PaymentGateway,
    MobileNumber,
    CreatedAt,
    UpdatedAt,
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
                    .table(PayoutDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PayoutDetails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PayoutDetails::AccountId).uuid().not_null())
                    .col(
                        ColumnDef::new(PayoutDetails::PaymentGateway)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayoutDetails::MobileNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PayoutDetails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PayoutDetails::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payout_details_account_id")
                            .from(PayoutDetails::Table, PayoutDetails::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One payout detail record per account (upserted).
        manager
            .create_index(
                Index::create()
                    .name("idx_payout_details_account_unique")
                    .table(PayoutDetails::Table)
                    .col(PayoutDetails::AccountId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PayoutDetails::Table).to_owned())
            .await
    }
}
