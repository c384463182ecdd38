use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ShiftReports {
    Table,
    AccountId,
    ReportDate,
    ReportedBy,
}

#[derive(DeriveIden)]
enum Withdraws {
    Table,
    AccountId,
}

#[derive(DeriveIden)]
enum Gigs {
    Table,
    AccountId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on shift_reports.account_id for per-account history
        manager
            .create_index(
                Index::create()
                    .name("idx_shift_reports_account_id")
                    .table(ShiftReports::Table)
                    .col(ShiftReports::AccountId)
                    .to_owned(),
            )
            .await?;

        // Index on shift_reports.report_date for window queries
        manager
            .create_index(
                Index::create()
                    .name("idx_shift_reports_report_date")
                    .table(ShiftReports::Table)
                    .col(ShiftReports::ReportDate)
                    .to_owned(),
            )
            .await?;

        // Index on shift_reports.reported_by for the leaderboard
        manager
            .create_index(
                Index::create()
                    .name("idx_shift_reports_reported_by")
                    .table(ShiftReports::Table)
                    .col(ShiftReports::ReportedBy)
                    .to_owned(),
            )
            .await?;

        // Index on withdraws.account_id for per-account ledgers
        manager
            .create_index(
                Index::create()
                    .name("idx_withdraws_account_id")
                    .table(Withdraws::Table)
                    .col(Withdraws::AccountId)
                    .to_owned(),
            )
            .await?;

        // Index on gigs.account_id for per-account gig lists
        manager
            .create_index(
                Index::create()
                    .name("idx_gigs_account_id")
                    .table(Gigs::Table)
                    .col(Gigs::AccountId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shift_reports_account_id")
                    .table(ShiftReports::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shift_reports_report_date")
                    .table(ShiftReports::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_shift_reports_reported_by")
                    .table(ShiftReports::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_withdraws_account_id")
                    .table(Withdraws::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_gigs_account_id")
                    .table(Gigs::Table)
                    .to_owned(),
            )
            .await
    }
}
