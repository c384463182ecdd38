use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use crate::models::accounts::{Model as Account, Platform};
use crate::models::shift_reports::{Model as Report, Shift};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingReport {
    pub account_id: Uuid,
    pub platform: Platform,
    pub username: String,
    pub missing_shifts: Vec<Shift>,
}

/// Which active accounts still owe a report today.
///
/// `todays_reports` must already be filtered to the current calendar date;
/// the caller decides what "today" means (server-local). Accounts with both
/// shifts reported are excluded entirely. Output is sorted by
/// `(platform, username)` so repeated runs list accounts in the same order.
pub fn missing_reports(active_accounts: &[Account], todays_reports: &[Report]) -> Vec<MissingReport> {
    let mut reported: HashMap<Uuid, HashSet<Shift>> = HashMap::new();
    for report in todays_reports {
        reported
            .entry(report.account_id)
            .or_default()
            .insert(report.shift);
    }

    let mut missing: Vec<MissingReport> = active_accounts
        .iter()
        .filter_map(|account| {
            let done = reported.get(&account.id);
            let missing_shifts: Vec<Shift> = Shift::ALL
                .into_iter()
                .filter(|shift| !done.is_some_and(|set| set.contains(shift)))
                .collect();

            if missing_shifts.is_empty() {
                None
            } else {
                Some(MissingReport {
                    account_id: account.id,
                    platform: account.platform,
                    username: account.username.clone(),
                    missing_shifts,
                })
            }
        })
        .collect();

    missing.sort_by(|a, b| {
        a.platform
            .as_str()
            .cmp(b.platform.as_str())
            .then_with(|| a.username.cmp(&b.username))
    });
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{account, date, report};

    #[test]
    fn am_only_means_pm_is_missing() {
        let acct = account(Platform::Fiverr, "halfway");
        let today = date(2024, 6, 1);
        let reports = vec![report(acct.id, today, Shift::Am)];

        let missing = missing_reports(&[acct.clone()], &reports);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].account_id, acct.id);
        assert_eq!(missing[0].missing_shifts, vec![Shift::Pm]);
    }

    #[test]
    fn both_shifts_reported_excludes_the_account() {
        let acct = account(Platform::Fiverr, "done");
        let today = date(2024, 6, 1);
        let reports = vec![
            report(acct.id, today, Shift::Am),
            report(acct.id, today, Shift::Pm),
        ];

        assert!(missing_reports(&[acct], &reports).is_empty());
    }

    #[test]
    fn no_reports_means_both_shifts_missing() {
        let acct = account(Platform::Direct, "silent");
        let missing = missing_reports(&[acct], &[]);
        assert_eq!(missing[0].missing_shifts, vec![Shift::Am, Shift::Pm]);
    }

    #[test]
    fn output_is_sorted_by_platform_then_username() {
        let upwork = account(Platform::Upwork, "aaa");
        let fiverr_b = account(Platform::Fiverr, "bbb");
        let fiverr_a = account(Platform::Fiverr, "abc");

        let missing = missing_reports(&[upwork, fiverr_b, fiverr_a], &[]);
        let order: Vec<_> = missing.iter().map(|m| m.username.as_str()).collect();
        assert_eq!(order, vec!["abc", "bbb", "aaa"]);
    }
}
