use actix_web::{HttpResponse, web};
use chrono::{Duration, Local};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::{accounts as account_db, shift_reports as report_db};
use crate::error::ApiResult;
use crate::handlers::dashboard::DaysQuery;

/// Quote a CSV field when it needs it (comma, quote or newline inside).
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    quoted.join(",")
}

fn csv_response(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body)
}

fn fmt_opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// GET /api/exports/reports.csv?days=N — flat report export.
pub async fn reports_csv(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<DaysQuery>,
) -> ApiResult<HttpResponse> {
    let days = query.days.unwrap_or(30).clamp(1, 366);
    let from = Local::now().date_naive() - Duration::days(days - 1);
    let reports = report_db::get_reports_since(db.get_ref(), from).await?;

    let mut body = String::from(
        "report_date,shift,account_id,orders_completed,pending_orders,available_balance,\
         pending_balance,orders_in_progress_value,ranking_page,success_rate,response_rate,\
         earnings_to_date,rating,notes\n",
    );
    for r in reports {
        body.push_str(&csv_row(&[
            r.report_date.to_string(),
            r.shift.as_str().to_string(),
            r.account_id.to_string(),
            r.orders_completed.to_string(),
            r.pending_orders.to_string(),
            r.available_balance.to_string(),
            r.pending_balance.to_string(),
            r.orders_in_progress_value.to_string(),
            fmt_opt(&r.ranking_page),
            fmt_opt(&r.success_rate),
            fmt_opt(&r.response_rate),
            fmt_opt(&r.earnings_to_date),
            fmt_opt(&r.rating),
            r.notes.clone().unwrap_or_default(),
        ]));
        body.push('\n');
    }

    Ok(csv_response("reports.csv", body))
}

/// GET /api/exports/accounts.csv — flat account export.
pub async fn accounts_csv(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let accounts = account_db::get_all_accounts(db.get_ref()).await?;

    let mut body = String::from(
        "platform,email,username,type_of_gigs,currency,status,account_level,success_rate,\
         browser_type,created_at\n",
    );
    for a in accounts {
        body.push_str(&csv_row(&[
            a.platform.as_str().to_string(),
            a.email.clone(),
            a.username.clone(),
            a.type_of_gigs.clone().unwrap_or_default(),
            a.currency.clone(),
            a.status.as_str().to_string(),
            a.account_level.to_string(),
            fmt_opt(&a.success_rate),
            a.browser_type.clone().unwrap_or_default(),
            a.created_at.to_rfc3339(),
        ]));
        body.push('\n');
    }

    Ok(csv_response("accounts.csv", body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn rows_join_fields_with_commas() {
        let row = csv_row(&["a".to_string(), "b,c".to_string(), String::new()]);
        assert_eq!(row, "a,\"b,c\",");
    }
}
