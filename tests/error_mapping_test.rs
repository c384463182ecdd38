//! The error taxonomy must map onto distinct HTTP status codes so callers
//! can tell a duplicate submission from a role failure from a missing row.

use actix_web::http::StatusCode;
use opsboard_backend::error::ApiError;

#[test]
fn each_error_kind_has_its_own_status() {
    assert_eq!(
        ApiError::Unauthorized("no token".into()).status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        ApiError::Forbidden("operators cannot do this".into()).status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        ApiError::Validation("amount must be positive".into()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::Conflict("already submitted".into()).status(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        ApiError::NotFound("no such account".into()).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ApiError::Upstream("email provider down".into()).status(),
        StatusCode::BAD_GATEWAY
    );
}

#[test]
fn record_not_found_from_the_store_becomes_not_found() {
    let err = ApiError::from_db(sea_orm::DbErr::RecordNotFound("Gig not found".into()));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn other_store_errors_stay_internal() {
    let err = ApiError::from_db(sea_orm::DbErr::Custom("boom".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn messages_surface_in_display() {
    let err = ApiError::Conflict(
        "A report for this account, date and shift has already been submitted".into(),
    );
    assert!(err.to_string().contains("already been submitted"));
}
