use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy for the whole HTTP surface.
///
/// Unauthorized means no usable identity; Forbidden means an identity with
/// an insufficient role. Conflict covers uniqueness violations (duplicate
/// account, duplicate shift report). Upstream covers the email provider and
/// other external collaborators.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ApiError {
    /// Map a query-layer error, surfacing a missing record as NotFound
    /// instead of a generic store failure.
    pub fn from_db(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Database(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Database(err) => {
                tracing::error!("Database error: {err}");
                // Never leak driver internals to the client.
                HttpResponse::build(self.status()).json(serde_json::json!({
                    "error": "Database error",
                }))
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {msg}");
                HttpResponse::build(self.status()).json(serde_json::json!({
                    "error": msg,
                }))
            }
            other => {
                tracing::warn!("{other}");
                HttpResponse::build(self.status()).json(serde_json::json!({
                    "error": other.to_string(),
                }))
            }
        }
    }
}
