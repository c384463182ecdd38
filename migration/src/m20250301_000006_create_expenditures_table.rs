use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `expenditures` table and its columns.
#[derive(DeriveIden)]
enum Expenditures {
    Table,
    Id,
    ItemName,
    ExpenditureType,
    Cost,
    TransactionId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenditures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenditures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenditures::ItemName).string().not_null())
                    .col(
                        ColumnDef::new(Expenditures::ExpenditureType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenditures::Cost).double().not_null())
                    .col(ColumnDef::new(Expenditures::TransactionId).string())
                    .col(
                        ColumnDef::new(Expenditures::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenditures::Table).to_owned())
            .await
    }
}
