pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_accounts_table;
mod m20250301_000003_create_gigs_table;
mod m20250301_000004_create_shift_reports_table;
mod m20250301_000005_create_withdraws_table;
mod m20250301_000006_create_expenditures_table;
mod m20250301_000007_create_payout_details_table;
mod m20250320_000001_add_report_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_accounts_table::Migration),
            Box::new(m20250301_000003_create_gigs_table::Migration),
            Box::new(m20250301_000004_create_shift_reports_table::Migration),
            Box::new(m20250301_000005_create_withdraws_table::Migration),
            Box::new(m20250301_000006_create_expenditures_table::Migration),
            Box::new(m20250301_000007_create_payout_details_table::Migration),
            Box::new(m20250320_000001_add_report_indexes::Migration),
        ]
    }
}
