use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use opsboard_backend::auth::jwks::JwksCache;
use opsboard_backend::cache::{CacheConfig, RedisCache};
use opsboard_backend::config::AppConfig;
use opsboard_backend::create_pool;
use opsboard_backend::email::EmailClient;
use opsboard_backend::handlers;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    let db_data = web::Data::new(db);

    // Initialize Redis cache for the dashboard views.
    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let redis_cache = RedisCache::new(&redis_url)
        .await
        .expect("Failed to connect to Redis");
    let redis_data = web::Data::new(Arc::new(redis_cache));
    let cache_config = web::Data::new(CacheConfig::from_env());
    tracing::info!("Connected to Redis");

    // Identity provider (Clerk) key set.
    let jwks_url = std::env::var("CLERK_JWKS_URL").expect("CLERK_JWKS_URL must be set");
    let jwks_cache = web::Data::new(Arc::new(JwksCache::new(&jwks_url)));

    // Email provider for missing-report alerts. An empty key means sends
    // fail upstream, which is fine for local development.
    let email_api_key = std::env::var("RESEND_API_KEY").unwrap_or_default();
    let email_from = std::env::var("ALERT_FROM")
        .unwrap_or_else(|_| "Opsboard <reports@opsboard.example>".to_string());
    let mailer = web::Data::new(EmailClient::new(email_api_key, email_from));

    let app_config = web::Data::new(AppConfig::from_env());

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(redis_data.clone())
            .app_data(cache_config.clone())
            .app_data(jwks_cache.clone())
            .app_data(mailer.clone())
            .app_data(app_config.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
