use actix_web::{HttpResponse, web};
use chrono::{Duration, Local, Utc};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::analytics;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::{accounts as account_db, shift_reports as report_db, users as user_db,
    withdraws as withdraw_db};
use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: Option<i64>,
}

impl DaysQuery {
    fn days(&self, default: i64) -> i64 {
        self.days.unwrap_or(default).clamp(1, 366)
    }
}

#[derive(Debug, Deserialize)]
pub struct MonthsQuery {
    pub months: Option<u32>,
}

impl MonthsQuery {
    fn months(&self) -> u32 {
        self.months.unwrap_or(6).clamp(1, 24)
    }
}

/// Serve from the cache when possible, otherwise compute and store.
async fn cached<T, F>(
    cache: &CacheData,
    key: &str,
    ttl: std::time::Duration,
    compute: F,
) -> ApiResult<T>
where
    T: Serialize + DeserializeOwned,
    F: std::future::Future<Output = ApiResult<T>>,
{
    match cache.get::<T>(key).await {
        Ok(Some(hit)) => return Ok(hit),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache read failed for {key}: {e}"),
    }

    let value = compute.await?;

    if let Err(e) = cache.set(key, &value, ttl).await {
        tracing::warn!("Cache write failed for {key}: {e}");
    }
    Ok(value)
}

/// GET /api/dashboard/summary — the landing-page composite.
pub async fn summary(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
) -> ApiResult<HttpResponse> {
    let result = cached(
        &cache,
        &keys::summary(),
        cache_config.summary_ttl,
        async {
            let (accounts, reports) = futures_util::try_join!(
                account_db::get_all_accounts(db.get_ref()),
                report_db::get_all_reports(db.get_ref()),
            )?;
            Ok(analytics::dashboard_summary(&accounts, &reports, Utc::now()))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/dashboard/trends/daily?days=30 — per-date totals across all
/// accounts; dates with no reports are absent from the series.
pub async fn daily_trends(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<DaysQuery>,
) -> ApiResult<HttpResponse> {
    let days = query.days(30);
    let result = cached(
        &cache,
        &keys::daily_trends(days),
        cache_config.trends_ttl,
        async {
            let from = Local::now().date_naive() - Duration::days(days - 1);
            let reports = report_db::get_reports_since(db.get_ref(), from).await?;
            Ok(analytics::daily_totals(&reports))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/dashboard/trends/monthly?months=6 — month-end snapshots of
/// account count and earned balance.
pub async fn monthly_trends(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<MonthsQuery>,
) -> ApiResult<HttpResponse> {
    let months = query.months();
    let result = cached(
        &cache,
        &keys::monthly_trends(months),
        cache_config.trends_ttl,
        async {
            let (accounts, reports) = futures_util::try_join!(
                account_db::get_all_accounts(db.get_ref()),
                report_db::get_all_reports(db.get_ref()),
            )?;
            let today = Local::now().date_naive();
            Ok(analytics::monthly_trends(&accounts, &reports, months, today))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/dashboard/completion?days=7 — reporting discipline per platform.
pub async fn completion(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<DaysQuery>,
) -> ApiResult<HttpResponse> {
    let days = query.days(7);
    let result = cached(
        &cache,
        &keys::completion(days),
        cache_config.summary_ttl,
        async {
            let from = Local::now().date_naive() - Duration::days(days - 1);
            let (accounts, reports) = futures_util::try_join!(
                account_db::get_all_accounts(db.get_ref()),
                report_db::get_reports_since(db.get_ref(), from),
            )?;
            Ok(analytics::completion_by_platform(&accounts, &reports, days))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/dashboard/leaderboard?days=7 — reports submitted per operator.
pub async fn leaderboard(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<DaysQuery>,
) -> ApiResult<HttpResponse> {
    let days = query.days(7);
    let result = cached(
        &cache,
        &keys::leaderboard(days),
        cache_config.summary_ttl,
        async {
            let from = Local::now().date_naive() - Duration::days(days - 1);
            let reports = report_db::get_reports_since(db.get_ref(), from).await?;

            let reporter_ids: Vec<_> = {
                let mut ids: Vec<_> = reports.iter().map(|r| r.reported_by).collect();
                ids.sort();
                ids.dedup();
                ids
            };
            let users = user_db::get_users_by_ids(db.get_ref(), reporter_ids).await?;

            Ok(analytics::leaderboard(&reports, &users))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/dashboard/finances — the balance roll-up across every account.
pub async fn finances(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
) -> ApiResult<HttpResponse> {
    let result = cached(
        &cache,
        &keys::finances(),
        cache_config.finances_ttl,
        async {
            let (accounts, reports, withdraws) = futures_util::try_join!(
                account_db::get_all_accounts(db.get_ref()),
                report_db::get_all_reports(db.get_ref()),
                withdraw_db::get_all_withdraws(db.get_ref()),
            )?;
            Ok(analytics::finances(&accounts, &reports, &withdraws))
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}
