use actix_web::{HttpResponse, web};
use chrono::{Duration, Local};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::analytics;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheData, keys};
use crate::db::accounts as account_db;
use crate::db::shift_reports as report_db;
use crate::error::{ApiError, ApiResult};
use crate::models::shift_reports::{CreateShiftReport, ReportListQuery, UpdateShiftReport};

const DUPLICATE_REPORT: &str =
    "A report for this account, date and shift has already been submitted";

async fn invalidate_dashboard(cache: &CacheData) {
    if let Err(e) = cache.invalidate_prefix(keys::DASHBOARD_PREFIX).await {
        tracing::warn!("Failed to invalidate dashboard cache: {e}");
    }
}

fn validate_metrics(
    orders_completed: i32,
    pending_orders: i32,
    balances: &[f64],
) -> Result<(), ApiError> {
    if orders_completed < 0 || pending_orders < 0 {
        return Err(ApiError::Validation(
            "Order counts cannot be negative".to_string(),
        ));
    }
    if balances.iter().any(|b| *b < 0.0) {
        return Err(ApiError::Validation(
            "Balances cannot be negative".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/reports — submit a shift report.
///
/// At most one report per (account, date, shift); the second submission
/// gets a Conflict, not a generic failure.
pub async fn submit_report(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateShiftReport>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();

    validate_metrics(
        input.orders_completed,
        input.pending_orders,
        &[
            input.available_balance,
            input.pending_balance,
            input.orders_in_progress_value,
        ],
    )?;

    // 1. Verify the account exists.
    let account_id = input.account_id;
    if account_db::get_account_by_id(db.get_ref(), account_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!("Account {account_id} not found")));
    }

    // 2. Check for a duplicate (account, date, shift) submission.
    if report_db::report_exists(db.get_ref(), account_id, input.report_date, input.shift).await? {
        return Err(ApiError::Conflict(DUPLICATE_REPORT.to_string()));
    }

    // 3. Create the report.
    let report = report_db::insert_report(db.get_ref(), input, user.0.id).await?;
    invalidate_dashboard(&cache).await;
    Ok(HttpResponse::Created().json(report))
}

/// GET /api/reports — list reports within a trailing day window.
pub async fn list_reports(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<ReportListQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let today = Local::now().date_naive();
    let from = today - Duration::days(query.days() - 1);
    let reports = report_db::list_reports(db.get_ref(), &query, from).await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// GET /api/reports/missing — which active accounts still owe a report for
/// today (server-local date), and which shifts.
pub async fn get_missing_reports(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let today = Local::now().date_naive();
    let (accounts, todays_reports) = futures_util::try_join!(
        account_db::get_active_accounts(db.get_ref()),
        report_db::get_reports_for_date(db.get_ref(), today),
    )?;

    let missing = analytics::missing_reports(&accounts, &todays_reports);
    Ok(HttpResponse::Ok().json(missing))
}

/// GET /api/reports/{id} — get a single report.
pub async fn get_report(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let report = report_db::get_report_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Shift report {id} not found")))?;
    Ok(HttpResponse::Ok().json(report))
}

/// PATCH /api/reports/{id} — update a report's metric fields. The identity
/// fields (account, date, shift) are immutable; the JSON list fields follow
/// the omitted/null/value tri-state contract.
pub async fn update_report(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateShiftReport>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner();

    validate_metrics(
        input.orders_completed.unwrap_or(0),
        input.pending_orders.unwrap_or(0),
        &[
            input.available_balance.unwrap_or(0.0),
            input.pending_balance.unwrap_or(0.0),
            input.orders_in_progress_value.unwrap_or(0.0),
        ],
    )?;

    let updated = report_db::update_report(db.get_ref(), id, input)
        .await
        .map_err(ApiError::from_db)?;
    invalidate_dashboard(&cache).await;
    Ok(HttpResponse::Ok().json(updated))
}
