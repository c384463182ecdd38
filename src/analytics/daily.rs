use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::round_money;
use crate::models::shift_reports::Model as Report;

/// Per-date totals across all accounts and both shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub total_available: f64,
    pub total_pending: f64,
    pub total_completed: i64,
    pub total_pending_orders: i64,
}

/// Group a flat report set by calendar date (shift ignored) and sum the
/// balance and order fields. Output is ordered by date ascending; dates
/// with zero reports are omitted, not zero-filled.
pub fn daily_totals(reports: &[Report]) -> Vec<DailyTotals> {
    let mut by_date: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();

    for report in reports {
        let entry = by_date.entry(report.report_date).or_insert(DailyTotals {
            date: report.report_date,
            total_available: 0.0,
            total_pending: 0.0,
            total_completed: 0,
            total_pending_orders: 0,
        });
        entry.total_available += report.available_balance;
        entry.total_pending += report.pending_balance;
        entry.total_completed += i64::from(report.orders_completed);
        entry.total_pending_orders += i64::from(report.pending_orders);
    }

    by_date
        .into_values()
        .map(|mut totals| {
            totals.total_available = round_money(totals.total_available);
            totals.total_pending = round_money(totals.total_pending);
            totals
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{date, report};
    use crate::models::shift_reports::Shift;
    use uuid::Uuid;

    #[test]
    fn sums_across_shifts_and_accounts_per_date() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let mut r1 = report(a, date(2024, 3, 1), Shift::Am);
        r1.available_balance = 10.10;
        r1.orders_completed = 2;
        let mut r2 = report(a, date(2024, 3, 1), Shift::Pm);
        r2.available_balance = 5.15;
        r2.pending_orders = 1;
        let mut r3 = report(b, date(2024, 3, 1), Shift::Am);
        r3.pending_balance = 7.50;

        let totals = daily_totals(&[r1, r2, r3]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].date, date(2024, 3, 1));
        assert_eq!(totals[0].total_available, 15.25);
        assert_eq!(totals[0].total_pending, 7.50);
        assert_eq!(totals[0].total_completed, 2);
        assert_eq!(totals[0].total_pending_orders, 1);
    }

    #[test]
    fn omits_dates_with_no_reports_and_orders_by_date() {
        let a = Uuid::new_v4();
        // A three-day gap between the two reports.
        let r1 = report(a, date(2024, 3, 5), Shift::Am);
        let r2 = report(a, date(2024, 3, 1), Shift::Pm);

        let totals = daily_totals(&[r1, r2]);
        let dates: Vec<_> = totals.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 3, 5)]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(daily_totals(&[]).is_empty());
    }
}
