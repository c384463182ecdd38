use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::{latest_report, round_money};
use crate::models::accounts::{Model as Account, Platform};
use crate::models::shift_reports::Model as Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketCount {
    pub label: String,
    pub count: u64,
}

/// The single composite the dashboard landing page renders.
///
/// Balance and order totals come from each account's latest report only —
/// never from summing history. Accounts without any report contribute zero
/// and are skipped by the rating/ranking counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_accounts: u64,
    pub accounts_created_last_7_days: u64,
    pub total_available_balance: f64,
    pub total_pending_balance: f64,
    pub total_active_orders_value: f64,
    pub total_orders_completed: i64,
    pub total_pending_orders: i64,
    /// Mean of the non-null ratings across latest reports; 0 when none.
    pub average_rating: f64,
    pub accounts_on_page_one: u64,
    pub accounts_on_page_two: u64,
    pub by_platform: Vec<BucketCount>,
    pub by_status: Vec<BucketCount>,
    pub by_level: Vec<BucketCount>,
}

pub fn dashboard_summary(
    accounts: &[Account],
    reports: &[Report],
    now: DateTime<Utc>,
) -> DashboardSummary {
    let mut reports_by_account: HashMap<Uuid, Vec<&Report>> = HashMap::new();
    for report in reports {
        reports_by_account
            .entry(report.account_id)
            .or_default()
            .push(report);
    }

    let mut total_available = 0.0;
    let mut total_pending = 0.0;
    let mut total_active_orders = 0.0;
    let mut total_completed: i64 = 0;
    let mut total_pending_orders: i64 = 0;
    let mut rating_sum = 0.0;
    let mut rating_count: u64 = 0;
    let mut page_one: u64 = 0;
    let mut page_two: u64 = 0;

    for account in accounts {
        let latest = reports_by_account
            .get(&account.id)
            .and_then(|rs| latest_report(rs.iter().copied()));
        let Some(latest) = latest else {
            continue;
        };

        total_available += latest.available_balance;
        total_pending += latest.pending_balance;
        total_active_orders += latest.orders_in_progress_value;
        total_completed += i64::from(latest.orders_completed);
        total_pending_orders += i64::from(latest.pending_orders);

        if let Some(rating) = latest.rating {
            rating_sum += rating;
            rating_count += 1;
        }
        match latest.ranking_page {
            Some(1) => page_one += 1,
            Some(2) => page_two += 1,
            _ => {}
        }
    }

    let week_ago = now - Duration::days(7);
    let created_last_7_days = accounts.iter().filter(|a| a.created_at >= week_ago).count() as u64;

    let average_rating = if rating_count == 0 {
        0.0
    } else {
        round_money(rating_sum / rating_count as f64)
    };

    DashboardSummary {
        total_accounts: accounts.len() as u64,
        accounts_created_last_7_days: created_last_7_days,
        total_available_balance: round_money(total_available),
        total_pending_balance: round_money(total_pending),
        total_active_orders_value: round_money(total_active_orders),
        total_orders_completed: total_completed,
        total_pending_orders,
        average_rating,
        accounts_on_page_one: page_one,
        accounts_on_page_two: page_two,
        by_platform: platform_buckets(accounts),
        by_status: status_buckets(accounts),
        by_level: level_buckets(accounts),
    }
}

fn platform_buckets(accounts: &[Account]) -> Vec<BucketCount> {
    Platform::ALL
        .iter()
        .map(|&platform| BucketCount {
            label: platform.as_str().to_string(),
            count: accounts.iter().filter(|a| a.platform == platform).count() as u64,
        })
        .collect()
}

fn status_buckets(accounts: &[Account]) -> Vec<BucketCount> {
    use crate::models::accounts::AccountStatus;

    [
        AccountStatus::Active,
        AccountStatus::Paused,
        AccountStatus::Risk,
    ]
    .iter()
    .map(|&status| BucketCount {
        label: status.as_str().to_string(),
        count: accounts.iter().filter(|a| a.status == status).count() as u64,
    })
    .collect()
}

fn level_buckets(accounts: &[Account]) -> Vec<BucketCount> {
    let mut counts: HashMap<i32, u64> = HashMap::new();
    for account in accounts {
        *counts.entry(account.account_level).or_insert(0) += 1;
    }

    let mut levels: Vec<_> = counts.into_iter().collect();
    levels.sort_by_key(|(level, _)| *level);
    levels
        .into_iter()
        .map(|(level, count)| BucketCount {
            label: level.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{account, date, report};
    use crate::models::accounts::AccountStatus;
    use crate::models::shift_reports::Shift;

    #[test]
    fn totals_use_only_the_latest_report_per_account() {
        let acct = account(Platform::Fiverr, "alpha");

        let mut stale = report(acct.id, date(2024, 4, 1), Shift::Am);
        stale.available_balance = 999.0;
        stale.rating = Some(1.0);

        let mut latest = report(acct.id, date(2024, 4, 2), Shift::Pm);
        latest.available_balance = 120.505;
        latest.pending_balance = 10.0;
        latest.orders_in_progress_value = 33.33;
        latest.orders_completed = 4;
        latest.pending_orders = 2;
        latest.rating = Some(4.5);
        latest.ranking_page = Some(1);

        let summary = dashboard_summary(&[acct], &[stale, latest], Utc::now());
        assert_eq!(summary.total_available_balance, 120.51);
        assert_eq!(summary.total_pending_balance, 10.0);
        assert_eq!(summary.total_active_orders_value, 33.33);
        assert_eq!(summary.total_orders_completed, 4);
        assert_eq!(summary.total_pending_orders, 2);
        assert_eq!(summary.average_rating, 4.5);
        assert_eq!(summary.accounts_on_page_one, 1);
        assert_eq!(summary.accounts_on_page_two, 0);
    }

    #[test]
    fn average_rating_skips_null_ratings_and_empty_accounts() {
        let rated = account(Platform::Fiverr, "rated");
        let unrated = account(Platform::Upwork, "unrated");
        let silent = account(Platform::Direct, "silent");

        let mut r1 = report(rated.id, date(2024, 4, 1), Shift::Am);
        r1.rating = Some(5.0);
        let r2 = report(unrated.id, date(2024, 4, 1), Shift::Am);

        let summary = dashboard_summary(&[rated, unrated, silent], &[r1, r2], Utc::now());
        // Only the one non-null rating participates in the mean.
        assert_eq!(summary.average_rating, 5.0);
        assert_eq!(summary.total_accounts, 3);
    }

    #[test]
    fn zero_reports_means_zero_totals() {
        let acct = account(Platform::Direct, "fresh");
        let summary = dashboard_summary(&[acct], &[], Utc::now());
        assert_eq!(summary.total_available_balance, 0.0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.accounts_on_page_one, 0);
    }

    #[test]
    fn buckets_cover_platform_status_and_level() {
        let mut a = account(Platform::Fiverr, "a");
        a.account_level = 2;
        let b = account(Platform::Fiverr, "b");
        let mut c = account(Platform::Upwork, "c");
        c.status = AccountStatus::Risk;

        let summary = dashboard_summary(&[a, b, c], &[], Utc::now());

        let fiverr = summary
            .by_platform
            .iter()
            .find(|b| b.label == "fiverr")
            .unwrap();
        assert_eq!(fiverr.count, 2);

        let risk = summary.by_status.iter().find(|b| b.label == "risk").unwrap();
        assert_eq!(risk.count, 1);

        let labels: Vec<_> = summary.by_level.iter().map(|b| b.label.clone()).collect();
        assert_eq!(labels, vec!["1", "2"]);
    }

    #[test]
    fn counts_recently_created_accounts() {
        let now = Utc::now();
        let mut fresh = account(Platform::Fiverr, "fresh");
        fresh.created_at = now - Duration::days(2);
        let mut old = account(Platform::Fiverr, "old");
        old.created_at = now - Duration::days(30);

        let summary = dashboard_summary(&[fresh, old], &[], now);
        assert_eq!(summary.accounts_created_last_7_days, 1);
    }
}
