use actix_web::{HttpResponse, web};
use chrono::{Duration, Local};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheData, keys};
use crate::db::accounts as account_db;
use crate::db::withdraws as withdraw_db;
use crate::error::{ApiError, ApiResult};
use crate::models::withdraws::{CreateWithdraw, WithdrawListQuery};

/// POST /api/withdraws — record a withdrawal against an account.
pub async fn create_withdraw(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateWithdraw>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();

    if input.amount <= 0.0 {
        return Err(ApiError::Validation(
            "Withdraw amount must be positive".to_string(),
        ));
    }
    if input.payment_means.trim().is_empty() {
        return Err(ApiError::Validation(
            "Payment means is required".to_string(),
        ));
    }

    let account_id = input.account_id;
    if account_db::get_account_by_id(db.get_ref(), account_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!("Account {account_id} not found")));
    }

    let withdraw = withdraw_db::insert_withdraw(db.get_ref(), input).await?;

    if let Err(e) = cache.invalidate_prefix(keys::DASHBOARD_PREFIX).await {
        tracing::warn!("Failed to invalidate dashboard cache: {e}");
    }

    Ok(HttpResponse::Created().json(withdraw))
}

/// GET /api/withdraws — list withdrawals, optionally within a day window.
pub async fn list_withdraws(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<WithdrawListQuery>,
) -> ApiResult<HttpResponse> {
    let withdraws = match query.days {
        Some(days) => {
            let from = Local::now().date_naive() - Duration::days(days.clamp(1, 366) - 1);
            withdraw_db::get_withdraws_since(db.get_ref(), from).await?
        }
        None => withdraw_db::get_all_withdraws(db.get_ref()).await?,
    };
    Ok(HttpResponse::Ok().json(withdraws))
}

/// GET /api/accounts/{id}/withdraws — one account's withdrawal ledger.
pub async fn get_withdraws_by_account(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let account_id = path.into_inner();
    let withdraws = withdraw_db::get_withdraws_by_account_id(db.get_ref(), account_id).await?;
    Ok(HttpResponse::Ok().json(withdraws))
}
