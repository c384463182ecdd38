use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::analytics::{MissingReport, missing_reports};
use crate::db;
use crate::email::EmailClient;
use crate::error::ApiResult;

/// Result of one alerting run, returned to both the on-demand action and
/// the cron endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AlertOutcome {
    pub message: String,
    pub report_count: usize,
}

/// Compute which active accounts are missing a report for `today` and, if
/// any are, send one notification email. Zero missing reports is a no-op
/// success, not an error.
pub async fn notify_missing_reports(
    db: &DatabaseConnection,
    mailer: &EmailClient,
    recipients: &[String],
    today: NaiveDate,
) -> ApiResult<AlertOutcome> {
    let accounts = db::accounts::get_active_accounts(db).await?;
    let todays_reports = db::shift_reports::get_reports_for_date(db, today).await?;
    let missing = missing_reports(&accounts, &todays_reports);

    if missing.is_empty() {
        return Ok(AlertOutcome {
            message: "All shift reports are in for today".to_string(),
            report_count: 0,
        });
    }

    let subject = format!(
        "{} account(s) missing shift reports for {}",
        missing.len(),
        today.format("%Y-%m-%d")
    );
    let html = render_missing_reports_email(&missing, today);
    mailer.send(recipients, &subject, &html).await?;

    tracing::info!(
        "Missing-report alert sent for {} account(s)",
        missing.len()
    );

    Ok(AlertOutcome {
        message: format!("Alert sent for {} account(s)", missing.len()),
        report_count: missing.len(),
    })
}

fn render_missing_reports_email(missing: &[MissingReport], today: NaiveDate) -> String {
    let mut rows = String::new();
    for entry in missing {
        let shifts: Vec<&str> = entry.missing_shifts.iter().map(|s| s.as_str()).collect();
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            entry.platform.as_str(),
            entry.username,
            shifts.join(", "),
        ));
    }

    format!(
        "<h2>Missing shift reports for {}</h2>\
         <table border=\"1\" cellpadding=\"4\">\
         <tr><th>Platform</th><th>Account</th><th>Missing shifts</th></tr>\
         {rows}\
         </table>",
        today.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::accounts::Platform;
    use crate::models::shift_reports::Shift;
    use uuid::Uuid;

    #[test]
    fn email_body_lists_each_account_and_its_missing_shifts() {
        let missing = vec![
            MissingReport {
                account_id: Uuid::new_v4(),
                platform: Platform::Fiverr,
                username: "alpha".to_string(),
                missing_shifts: vec![Shift::Pm],
            },
            MissingReport {
                account_id: Uuid::new_v4(),
                platform: Platform::Upwork,
                username: "beta".to_string(),
                missing_shifts: vec![Shift::Am, Shift::Pm],
            },
        ];

        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let html = render_missing_reports_email(&missing, today);
        assert!(html.contains("2024-06-01"));
        assert!(html.contains("alpha"));
        assert!(html.contains("PM"));
        assert!(html.contains("AM, PM"));
    }
}
