use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::require_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::accounts as account_db;
use crate::db::gigs as gig_db;
use crate::error::{ApiError, ApiResult};
use crate::models::gigs::{CreateGig, RatingType, UpdateGig};

/// POST /api/gigs — create a gig on an account (admin only).
pub async fn create_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateGig>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let input = body.into_inner();

    if input.name.trim().is_empty() {
        return Err(ApiError::Validation("Gig name is required".to_string()));
    }
    if input.rating_email.is_some() && input.rating_type != Some(RatingType::Paypal) {
        return Err(ApiError::Validation(
            "rating_email is only valid for paypal ratings".to_string(),
        ));
    }

    let account_id = input.account_id;
    if account_db::get_account_by_id(db.get_ref(), account_id)
        .await?
        .is_none()
    {
        return Err(ApiError::NotFound(format!("Account {account_id} not found")));
    }

    let gig = gig_db::insert_gig(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(gig))
}

/// GET /api/accounts/{id}/gigs — list an account's gigs.
pub async fn get_gigs_by_account(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let account_id = path.into_inner();
    let gigs = gig_db::get_gigs_by_account_id(db.get_ref(), account_id).await?;
    Ok(HttpResponse::Ok().json(gigs))
}

/// GET /api/gigs/rated — the rating information report: every rated gig,
/// soonest next-rate date first.
pub async fn get_rated_gigs(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let gigs = gig_db::get_rated_gigs(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(gigs))
}

/// GET /api/gigs/{id} — get a single gig.
pub async fn get_gig(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let gig = gig_db::get_gig_by_id(db.get_ref(), id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Gig {id} not found")))?;
    Ok(HttpResponse::Ok().json(gig))
}

/// PUT /api/gigs/{id} — update a gig (admin only). Clearing `rated` wipes
/// the rating fields so the rating report never shows stale data.
pub async fn update_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGig>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let id = path.into_inner();

    let updated = gig_db::update_gig(db.get_ref(), id, body.into_inner())
        .await
        .map_err(ApiError::from_db)?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/gigs/{id} — delete a gig (admin only).
pub async fn delete_gig(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;
    let id = path.into_inner();

    let result = gig_db::delete_gig(db.get_ref(), id).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound(format!("Gig {id} not found")));
    }
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Gig {id} deleted"),
    })))
}
