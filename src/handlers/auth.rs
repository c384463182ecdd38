use actix_web::HttpResponse;

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiResult;
use crate::models::users::UserResponse;

/// GET /api/auth/me — return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserResponse::from(user.0)))
}
