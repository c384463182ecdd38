use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::require_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheData, keys};
use crate::db::accounts as account_db;
use crate::db::payout_details as payout_db;
use crate::error::{ApiError, ApiResult};
use crate::models::accounts::{
    AccountListQuery, BulkAccountEntry, BulkCreateOutcome, BulkFailure, CreateAccount,
    UpdateAccount,
};
use crate::models::payout_details::UpsertPayoutDetail;

const DUPLICATE_ACCOUNT: &str = "An account with this email already exists on this platform";

async fn invalidate_dashboard(cache: &CacheData) {
    if let Err(e) = cache.invalidate_prefix(keys::DASHBOARD_PREFIX).await {
        tracing::warn!("Failed to invalidate dashboard cache: {e}");
    }
}

/// POST /api/accounts — create a platform account (admin only).
pub async fn create_account(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateAccount>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let input = body.into_inner();

    if input.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }
    if input.username.trim().is_empty() {
        return Err(ApiError::Validation("Username is required".to_string()));
    }

    // Duplicate check before the insert; the unique index catches races.
    if account_db::find_by_platform_email(db.get_ref(), input.platform, &input.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(DUPLICATE_ACCOUNT.to_string()));
    }

    let account = account_db::insert_account(db.get_ref(), input, user.0.id).await?;
    invalidate_dashboard(&cache).await;
    Ok(HttpResponse::Created().json(account))
}

/// POST /api/accounts/bulk — create accounts from a shift report's
/// "accounts created" list.
///
/// Each entry succeeds or fails on its own; one duplicate never aborts the
/// batch. The whole request only fails when every entry does.
pub async fn bulk_create_accounts(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<Vec<BulkAccountEntry>>,
) -> ApiResult<HttpResponse> {
    let entries = body.into_inner();
    if entries.is_empty() {
        return Err(ApiError::Validation("No accounts to create".to_string()));
    }

    let mut created = 0usize;
    let mut failed: Vec<BulkFailure> = Vec::new();

    for entry in entries {
        let email = entry.email.trim().to_string();
        if email.is_empty() {
            failed.push(BulkFailure {
                email,
                error: "Email is required".to_string(),
            });
            continue;
        }

        match account_db::find_by_platform_email(db.get_ref(), entry.platform, &email).await {
            Ok(Some(_)) => {
                failed.push(BulkFailure {
                    email,
                    error: "Already exists on this platform".to_string(),
                });
                continue;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Bulk account lookup failed for {email}: {e}");
                failed.push(BulkFailure {
                    email,
                    error: "Database error".to_string(),
                });
                continue;
            }
        }

        // Default the profile fields; the edit form fills them in later.
        let username = email.split('@').next().unwrap_or(&email).to_string();
        let input = CreateAccount {
            platform: entry.platform,
            email: email.clone(),
            username,
            type_of_gigs: None,
            currency: None,
            status: None,
            account_level: None,
            success_rate: None,
            browser_type: None,
            proxy: None,
        };

        match account_db::insert_account(db.get_ref(), input, user.0.id).await {
            Ok(_) => created += 1,
            Err(e) => {
                tracing::error!("Bulk account insert failed for {email}: {e}");
                failed.push(BulkFailure {
                    email,
                    error: "Database error".to_string(),
                });
            }
        }
    }

    if created > 0 {
        invalidate_dashboard(&cache).await;
    }

    let outcome = BulkCreateOutcome { created, failed };
    if outcome.created == 0 {
        // Every entry failed.
        Ok(HttpResponse::BadRequest().json(outcome))
    } else {
        Ok(HttpResponse::Created().json(outcome))
    }
}

/// GET /api/accounts — list accounts with platform/status filters.
pub async fn get_accounts(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<AccountListQuery>,
) -> ApiResult<HttpResponse> {
    let accounts = account_db::get_accounts(db.get_ref(), &query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

/// GET /api/accounts/{id} — get a single account.
pub async fn get_account(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let account = account_db::get_account_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Account {id} not found")))?;
    Ok(HttpResponse::Ok().json(account))
}

/// PUT /api/accounts/{id} — update an account (admin only).
pub async fn update_account(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAccount>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let id = path.into_inner();
    let input = body.into_inner();

    let existing = account_db::get_account_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Account {id} not found")))?;

    // A changed email must not collide with another account on the platform.
    if let Some(new_email) = &input.email {
        if let Some(other) =
            account_db::find_by_platform_email(db.get_ref(), existing.platform, new_email).await?
        {
            if other.id != id {
                return Err(ApiError::Conflict(DUPLICATE_ACCOUNT.to_string()));
            }
        }
    }

    let updated = account_db::update_account(db.get_ref(), id, input)
        .await
        .map_err(ApiError::from_db)?;
    invalidate_dashboard(&cache).await;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/accounts/{id} — delete an account (admin only; unused by the
/// main flows but kept for cleanup).
pub async fn delete_account(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let id = path.into_inner();

    let result = account_db::delete_account(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Account {id} not found")));
    }

    invalidate_dashboard(&cache).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Account {id} deleted"),
    })))
}

/// GET /api/accounts/{id}/payout-details — payout configuration, if set.
pub async fn get_payout_details(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let account_id = path.into_inner();
    let detail = payout_db::get_by_account_id(db.get_ref(), account_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("No payout details for account {account_id}"))
        })?;
    Ok(HttpResponse::Ok().json(detail))
}

/// PUT /api/accounts/{id}/payout-details — upsert payout configuration
/// (admin only; at most one row per account).
pub async fn upsert_payout_details(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpsertPayoutDetail>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let account_id = path.into_inner();
    let input = body.into_inner();

    if input.mobile_number.trim().is_empty() {
        return Err(ApiError::Validation("Mobile number is required".to_string()));
    }

    if account_db::get_account_by_id(db.get_ref(), account_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!("Account {account_id} not found")));
    }

    let detail = payout_db::upsert_for_account(db.get_ref(), account_id, input).await?;
    Ok(HttpResponse::Ok().json(detail))
}
