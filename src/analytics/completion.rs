use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::accounts::{AccountStatus, Model as Account, Platform};
use crate::models::shift_reports::Model as Report;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCompletion {
    pub platform: Platform,
    pub expected_reports: u64,
    pub actual_reports: u64,
    /// `round(actual / expected × 100)`; 0 when nothing was expected.
    pub completion_rate: u32,
}

/// Reporting discipline per platform over a trailing window of `days` days.
///
/// Expected = active accounts on the platform × days × 2 shifts/day.
/// Actual counts every report in the window belonging to an account on the
/// platform, regardless of that account's current status.
pub fn completion_by_platform(
    accounts: &[Account],
    reports: &[Report],
    days: i64,
) -> Vec<PlatformCompletion> {
    let platform_of: HashMap<Uuid, Platform> =
        accounts.iter().map(|a| (a.id, a.platform)).collect();

    let mut actual: HashMap<Platform, u64> = HashMap::new();
    for report in reports {
        if let Some(platform) = platform_of.get(&report.account_id) {
            *actual.entry(*platform).or_insert(0) += 1;
        }
    }

    Platform::ALL
        .iter()
        .map(|&platform| {
            let active_accounts = accounts
                .iter()
                .filter(|a| a.platform == platform && a.status == AccountStatus::Active)
                .count() as u64;
            let expected_reports = active_accounts * days.max(0) as u64 * 2;
            let actual_reports = actual.get(&platform).copied().unwrap_or(0);
            let completion_rate = if expected_reports == 0 {
                0
            } else {
                ((actual_reports as f64 / expected_reports as f64) * 100.0).round() as u32
            };

            PlatformCompletion {
                platform,
                expected_reports,
                actual_reports,
                completion_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{account, date, report};
    use crate::models::shift_reports::Shift;

    #[test]
    fn the_seven_day_fiverr_example() {
        // 3 active fiverr accounts over 7 days at 2 shifts/day = 42 expected;
        // 30 actual reports round to a 71% completion rate.
        let accounts: Vec<_> = (0..3)
            .map(|i| account(Platform::Fiverr, &format!("fiverr-{i}")))
            .collect();

        let mut reports = Vec::new();
        'outer: for d in 1..=7 {
            for acct in &accounts {
                for shift in [Shift::Am, Shift::Pm] {
                    if reports.len() == 30 {
                        break 'outer;
                    }
                    reports.push(report(acct.id, date(2024, 1, d), shift));
                }
            }
        }
        assert_eq!(reports.len(), 30);

        let completion = completion_by_platform(&accounts, &reports, 7);
        let fiverr = completion
            .iter()
            .find(|c| c.platform == Platform::Fiverr)
            .unwrap();
        assert_eq!(fiverr.expected_reports, 42);
        assert_eq!(fiverr.actual_reports, 30);
        assert_eq!(fiverr.completion_rate, 71);
    }

    #[test]
    fn zero_expected_is_zero_not_a_division_error() {
        let completion = completion_by_platform(&[], &[], 7);
        assert_eq!(completion.len(), 3);
        for entry in completion {
            assert_eq!(entry.expected_reports, 0);
            assert_eq!(entry.completion_rate, 0);
        }
    }

    #[test]
    fn paused_accounts_do_not_add_to_expected() {
        use crate::models::accounts::AccountStatus;

        let mut paused = account(Platform::Upwork, "paused-upwork");
        paused.status = AccountStatus::Paused;
        let active = account(Platform::Upwork, "active-upwork");

        // One report from each account on one day.
        let reports = vec![
            report(paused.id, date(2024, 1, 1), Shift::Am),
            report(active.id, date(2024, 1, 1), Shift::Am),
        ];

        let completion = completion_by_platform(&[paused, active], &reports, 1);
        let upwork = completion
            .iter()
            .find(|c| c.platform == Platform::Upwork)
            .unwrap();
        // Expected counts only the active account; actual counts both reports.
        assert_eq!(upwork.expected_reports, 2);
        assert_eq!(upwork.actual_reports, 2);
        assert_eq!(upwork.completion_rate, 100);
    }
}
