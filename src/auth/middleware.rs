use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::db::users::find_or_create_from_auth;
use crate::error::ApiError;
use crate::models::users::{self, CreateUserFromAuth};

/// The request-scoped identity context: resolved once per request from the
/// bearer token, then passed into handlers as an extractor argument. Nothing
/// else in the crate looks up session state.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    Error::from(ApiError::Unauthorized(
                        "Missing Authorization header".to_string(),
                    ))
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                Error::from(ApiError::Unauthorized(
                    "Authorization header must be: Bearer <token>".to_string(),
                ))
            })?;

            // 2. Get the JWKS cache from app data.
            let jwks_cache = req.app_data::<web::Data<Arc<JwksCache>>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWKS cache not configured")
            })?;

            // 3. Validate the JWT against the identity provider's keys.
            let claims = jwks_cache
                .validate_token(token)
                .await
                .map(|td| td.claims)
                .map_err(|e| Error::from(ApiError::Unauthorized(format!("Invalid token: {e}"))))?;

            let email = claims.user_email().ok_or_else(|| {
                Error::from(ApiError::Unauthorized(
                    "No email in token claims".to_string(),
                ))
            })?;

            // 4. Get the database connection.
            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            // 5. Find or create the internal user for this identity.
            let user = find_or_create_from_auth(
                db.get_ref(),
                CreateUserFromAuth {
                    clerk_id: claims.clerk_id().to_string(),
                    email,
                    name: claims.display_name(),
                },
            )
            .await
            .map_err(ApiError::from)?;

            Ok(AuthenticatedUser(user))
        })
    }
}
