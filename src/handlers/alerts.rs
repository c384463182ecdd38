use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Local;
use sea_orm::DatabaseConnection;

use crate::alerts::notify_missing_reports;
use crate::auth::middleware::AuthenticatedUser;
use crate::config::AppConfig;
use crate::email::EmailClient;
use crate::error::{ApiError, ApiResult};

/// POST /api/alerts/missing-reports — on-demand alert run, available to any
/// authenticated user.
pub async fn trigger_alert(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    mailer: web::Data<EmailClient>,
    config: web::Data<AppConfig>,
) -> ApiResult<HttpResponse> {
    if config.alert_recipients.is_empty() {
        return Err(ApiError::Validation(
            "ALERT_RECIPIENTS is not configured".to_string(),
        ));
    }

    let today = Local::now().date_naive();
    let outcome =
        notify_missing_reports(db.get_ref(), &mailer, &config.alert_recipients, today).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// POST /api/cron/missing-reports — the scheduled trigger. No user session;
/// the caller must present the shared secret as a bearer token. A mismatch
/// fails before anything is computed.
pub async fn cron_trigger(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    mailer: web::Data<EmailClient>,
    config: web::Data<AppConfig>,
) -> ApiResult<HttpResponse> {
    let secret = config
        .cron_secret
        .as_deref()
        .ok_or_else(|| ApiError::Unauthorized("Cron trigger is not configured".to_string()))?;

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    if token != secret {
        return Err(ApiError::Unauthorized("Invalid cron token".to_string()));
    }

    if config.alert_recipients.is_empty() {
        return Err(ApiError::Validation(
            "ALERT_RECIPIENTS is not configured".to_string(),
        ));
    }

    let today = Local::now().date_naive();
    let outcome =
        notify_missing_reports(db.get_ref(), &mailer, &config.alert_recipients, today).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
