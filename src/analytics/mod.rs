//! Pure aggregation over in-memory record sets.
//!
//! Every function here takes plain entity slices and returns derived
//! summaries; none of them touch the store. Handlers fetch rows through
//! `crate::db` and feed them in.

pub mod completion;
pub mod daily;
pub mod finances;
pub mod latest;
pub mod leaderboard;
pub mod missing;
pub mod summary;
pub mod trends;

pub use completion::{PlatformCompletion, completion_by_platform};
pub use daily::{DailyTotals, daily_totals};
pub use finances::{AccountBalance, FinancesSummary, finances};
pub use latest::{latest_report, latest_report_at_or_before};
pub use leaderboard::{LeaderboardEntry, leaderboard};
pub use missing::{MissingReport, missing_reports};
pub use summary::{BucketCount, DashboardSummary, dashboard_summary};
pub use trends::{MonthlyTrend, monthly_trends};

/// Round a monetary value to cents, half-up. Idempotent.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    use crate::models::accounts::{AccountStatus, Model as Account, Platform};
    use crate::models::shift_reports::{Model as Report, Shift};

    pub fn account(platform: Platform, username: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            platform,
            email: format!("{username}@example.com"),
            username: username.to_string(),
            type_of_gigs: None,
            currency: "USD".to_string(),
            status: AccountStatus::Active,
            account_level: 1,
            success_rate: None,
            browser_type: None,
            proxy: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn report(account_id: Uuid, date: NaiveDate, shift: Shift) -> Report {
        Report {
            id: Uuid::new_v4(),
            account_id,
            reported_by: Uuid::new_v4(),
            report_date: date,
            shift,
            orders_completed: 0,
            pending_orders: 0,
            available_balance: 0.0,
            pending_balance: 0.0,
            orders_in_progress_value: 0.0,
            ranking_page: None,
            success_rate: None,
            response_rate: None,
            earnings_to_date: None,
            rating: None,
            notes: None,
            handed_over_to: None,
            orders_in_progress: None,
            accounts_created: None,
            created_at: Utc::now(),
        }
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }
}

#[cfg(test)]
mod tests {
    use super::round_money;

    #[test]
    fn rounds_to_the_nearest_cent() {
        assert_eq!(round_money(10.456), 10.46);
        assert_eq!(round_money(10.454), 10.45);
        assert_eq!(round_money(2.0 + 0.125), 2.13);
        assert_eq!(round_money(-3.456), -3.46);
    }

    #[test]
    fn rounding_is_idempotent() {
        for x in [0.0, 0.1 + 0.2, 99.995, 1234.5678] {
            let once = round_money(x);
            assert_eq!(round_money(once), once);
        }
    }
}
