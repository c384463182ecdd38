use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::expenditures as expenditure_db;
use crate::error::{ApiError, ApiResult};
use crate::models::expenditures::CreateExpenditure;

/// POST /api/expenditures — record a business expenditure.
pub async fn create_expenditure(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateExpenditure>,
) -> ApiResult<HttpResponse> {
    let input = body.into_inner();

    if input.item_name.trim().is_empty() {
        return Err(ApiError::Validation("Item name is required".to_string()));
    }
    if input.cost < 0.0 {
        return Err(ApiError::Validation(
            "Cost cannot be negative".to_string(),
        ));
    }

    let expenditure = expenditure_db::insert_expenditure(db.get_ref(), input).await?;
    Ok(HttpResponse::Created().json(expenditure))
}

/// GET /api/expenditures — list all expenditures, newest first.
pub async fn list_expenditures(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    let expenditures = expenditure_db::get_all_expenditures(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(expenditures))
}
