use chrono::NaiveDate;

use crate::models::shift_reports::Model as Report;

/// The report that defines an account's "current state": maximum
/// `(report_date, shift)` with PM ranking above AM on the same date.
/// Returns `None` when the account has no reports at all.
pub fn latest_report<'a, I>(reports: I) -> Option<&'a Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .max_by_key(|r| (r.report_date, r.shift.rank()))
}

/// Same selection restricted to reports dated on or before `cutoff`
/// (month-end snapshots).
pub fn latest_report_at_or_before<'a, I>(reports: I, cutoff: NaiveDate) -> Option<&'a Report>
where
    I: IntoIterator<Item = &'a Report>,
{
    latest_report(reports.into_iter().filter(|r| r.report_date <= cutoff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testutil::{date, report};
    use crate::models::shift_reports::Shift;
    use uuid::Uuid;

    #[test]
    fn none_when_no_reports() {
        let reports: Vec<Report> = Vec::new();
        assert!(latest_report(&reports).is_none());
    }

    #[test]
    fn picks_the_most_recent_date() {
        let account = Uuid::new_v4();
        let older = report(account, date(2024, 1, 1), Shift::Pm);
        let newer = report(account, date(2024, 1, 3), Shift::Am);
        let reports = vec![older, newer.clone()];

        let latest = latest_report(&reports).unwrap();
        assert_eq!(latest.id, newer.id);
    }

    #[test]
    fn pm_outranks_am_on_the_same_date() {
        let account = Uuid::new_v4();
        let am = report(account, date(2024, 1, 2), Shift::Am);
        let pm = report(account, date(2024, 1, 2), Shift::Pm);
        // Order in the input must not matter.
        let reports = vec![pm.clone(), am];

        let latest = latest_report(&reports).unwrap();
        assert_eq!(latest.id, pm.id);
    }

    #[test]
    fn cutoff_excludes_later_reports() {
        let account = Uuid::new_v4();
        let in_window = report(account, date(2024, 1, 31), Shift::Pm);
        let after = report(account, date(2024, 2, 1), Shift::Am);
        let reports = vec![in_window.clone(), after];

        let latest = latest_report_at_or_before(&reports, date(2024, 1, 31)).unwrap();
        assert_eq!(latest.id, in_window.id);
        assert!(latest_report_at_or_before(&reports, date(2023, 12, 31)).is_none());
    }
}
