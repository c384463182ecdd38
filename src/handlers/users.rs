use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::require_admin;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::users as user_db;
use crate::error::ApiResult;
use crate::models::users::UserResponse;

/// GET /api/users — list all users (admin only).
pub async fn get_users(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> ApiResult<HttpResponse> {
    require_admin(&user.0)?;

    let users = user_db::get_all_users(db.get_ref()).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(users))
}
