use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `shift_reports` table and its columns.
#[derive(DeriveIden)]
enum ShiftReports {
    Table,
    Id,
    AccountId,
    ReportedBy,
    ReportDate,
    Shift,
    OrdersCompleted,
    PendingOrders,
    AvailableBalance,
    PendingBalance,
    OrdersInProgressValue,
    RankingPage,
    SuccessRate,
    ResponseRate,
    EarningsToDate,
    Rating,
    Notes,
    HandedOverTo,
    OrdersInProgress,
    AccountsCreated,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
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
                    .table(ShiftReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShiftReports::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShiftReports::AccountId).uuid().not_null())
                    .col(ColumnDef::new(ShiftReports::ReportedBy).uuid().not_null())
                    .col(ColumnDef::new(ShiftReports::ReportDate).date().not_null())
                    .col(ColumnDef::new(ShiftReports::Shift).string().not_null())
                    .col(
                        ColumnDef::new(ShiftReports::OrdersCompleted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ShiftReports::PendingOrders)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ShiftReports::AvailableBalance)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(ShiftReports::PendingBalance)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(ShiftReports::OrdersInProgressValue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(ShiftReports::RankingPage).integer())
                    .col(ColumnDef::new(ShiftReports::SuccessRate).double())
                    .col(ColumnDef::new(ShiftReports::ResponseRate).double())
                    .col(ColumnDef::new(ShiftReports::EarningsToDate).double())
                    .col(ColumnDef::new(ShiftReports::Rating).double())
                    .col(ColumnDef::new(ShiftReports::Notes).text())
                    .col(ColumnDef::new(ShiftReports::HandedOverTo).uuid())
                    .col(ColumnDef::new(ShiftReports::OrdersInProgress).json_binary())
                    .col(ColumnDef::new(ShiftReports::AccountsCreated).json_binary())
                    .col(
                        ColumnDef::new(ShiftReports::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_reports_account_id")
                            .from(ShiftReports::Table, ShiftReports::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_reports_reported_by")
                            .from(ShiftReports::Table, ShiftReports::ReportedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shift_reports_handed_over_to")
                            .from(ShiftReports::Table, ShiftReports::HandedOverTo)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one AM and one PM report per account per day.
        manager
            .create_index(
                Index::create()
                    .name("idx_shift_reports_account_date_shift_unique")
                    .table(ShiftReports::Table)
                    .col(ShiftReports::AccountId)
                    .col(ShiftReports::ReportDate)
                    .col(ShiftReports::Shift)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShiftReports::Table).to_owned())
            .await
    }
}
