use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{latest_report_at_or_before, round_money};
use crate::models::accounts::Model as Account;
use crate::models::shift_reports::Model as Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Calendar month, formatted `YYYY-MM`.
    pub month: String,
    pub total_accounts: u64,
    pub money_earned: f64,
}

/// Month-end snapshots for the trailing `months` calendar months, oldest
/// first. A month's snapshot counts the accounts that existed by its end and
/// sums the available balance from each one's latest report dated on or
/// before that month end.
pub fn monthly_trends(
    accounts: &[Account],
    reports: &[Report],
    months: u32,
    today: NaiveDate,
) -> Vec<MonthlyTrend> {
    let mut reports_by_account: HashMap<Uuid, Vec<&Report>> = HashMap::new();
    for report in reports {
        reports_by_account
            .entry(report.account_id)
            .or_default()
            .push(report);
    }

    (0..months)
        .rev()
        .map(|back| {
            let month_start = first_of_month_back(today, back);
            let month_end = end_of_month(month_start);

            let mut total_accounts = 0u64;
            let mut money_earned = 0.0;
            for account in accounts {
                if account.created_at.date_naive() > month_end {
                    continue;
                }
                total_accounts += 1;
                if let Some(latest) = reports_by_account
                    .get(&account.id)
                    .and_then(|rs| latest_report_at_or_before(rs.iter().copied(), month_end))
                {
                    money_earned += latest.available_balance;
                }
            }

            MonthlyTrend {
                month: month_start.format("%Y-%m").to_string(),
                total_accounts,
                money_earned: round_money(money_earned),
            }
        })
        .collect()
}

/// First day of the month `back` months before the one containing `today`.
fn first_of_month_back(today: NaiveDate, back: u32) -> NaiveDate {
    let mut year = today.year();
    let mut month = today.month() as i32 - back as i32;
    while month <= 0 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, month as u32, 1).expect("valid month start")
}

/// Last day of the month that `month_start` opens.
fn end_of_month(month_start: NaiveDate) -> NaiveDate {
    let (year, month) = if month_start.month() == 12 {
        (month_start.year() + 1, 1)
    } else {
        (month_start.year(), month_start.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .expect("valid month end")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{account, date, report};
    use crate::models::accounts::Platform;
    use crate::models::shift_reports::Shift;
    use chrono::{TimeZone, Utc};

    #[test]
    fn month_arithmetic_handles_year_boundaries() {
        assert_eq!(first_of_month_back(date(2024, 2, 15), 0), date(2024, 2, 1));
        assert_eq!(first_of_month_back(date(2024, 2, 15), 3), date(2023, 11, 1));
        assert_eq!(end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2023, 12, 1)), date(2023, 12, 31));
    }

    #[test]
    fn snapshots_use_the_balance_as_of_month_end() {
        let acct = account(Platform::Fiverr, "trend");

        let mut january = report(acct.id, date(2024, 1, 20), Shift::Pm);
        january.available_balance = 100.0;
        let mut february = report(acct.id, date(2024, 2, 10), Shift::Am);
        february.available_balance = 250.0;

        let trends = monthly_trends(&[acct], &[january, february], 2, date(2024, 2, 15));
        assert_eq!(trends.len(), 2);

        // January's snapshot must not see February's report.
        assert_eq!(trends[0].month, "2024-01");
        assert_eq!(trends[0].money_earned, 100.0);
        assert_eq!(trends[1].month, "2024-02");
        assert_eq!(trends[1].money_earned, 250.0);
    }

    #[test]
    fn accounts_created_after_month_end_are_excluded() {
        let mut late = account(Platform::Upwork, "late");
        late.created_at = Utc.with_ymd_and_hms(2024, 2, 5, 12, 0, 0).unwrap();

        let trends = monthly_trends(&[late], &[], 2, date(2024, 2, 15));
        assert_eq!(trends[0].month, "2024-01");
        assert_eq!(trends[0].total_accounts, 0);
        assert_eq!(trends[1].month, "2024-02");
        assert_eq!(trends[1].total_accounts, 1);
    }

    #[test]
    fn months_are_ordered_oldest_first() {
        let trends = monthly_trends(&[], &[], 3, date(2024, 3, 10));
        let labels: Vec<_> = trends.iter().map(|t| t.month.clone()).collect();
        assert_eq!(labels, vec!["2024-01", "2024-02", "2024-03"]);
    }
}
