pub mod accounts;
pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod expenditures;
pub mod exports;
pub mod gigs;
pub mod reports;
pub mod users;
pub mod withdraws;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (protected by JWT via the AuthenticatedUser extractor) ──
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));

    // ── User routes ──
    cfg.service(web::resource("/users").route(web::get().to(users::get_users)));

    // ── Account routes (creation/editing is admin-only) ──
    cfg.service(
        web::scope("/accounts")
            .route("", web::get().to(accounts::get_accounts))
            .route("", web::post().to(accounts::create_account))
            .route("/bulk", web::post().to(accounts::bulk_create_accounts))
            .route("/{id}", web::get().to(accounts::get_account))
            .route("/{id}", web::put().to(accounts::update_account))
            .route("/{id}", web::delete().to(accounts::delete_account))
            .route("/{id}/gigs", web::get().to(gigs::get_gigs_by_account))
            .route(
                "/{id}/withdraws",
                web::get().to(withdraws::get_withdraws_by_account),
            )
            .route(
                "/{id}/payout-details",
                web::get().to(accounts::get_payout_details),
            )
            .route(
                "/{id}/payout-details",
                web::put().to(accounts::upsert_payout_details),
            ),
    );

    // ── Gig routes ──
    cfg.service(
        web::scope("/gigs")
            .route("", web::post().to(gigs::create_gig))
            .route("/rated", web::get().to(gigs::get_rated_gigs))
            .route("/{id}", web::get().to(gigs::get_gig))
            .route("/{id}", web::put().to(gigs::update_gig))
            .route("/{id}", web::delete().to(gigs::delete_gig)),
    );

    // ── Shift report routes ──
    cfg.service(
        web::scope("/reports")
            .route("", web::get().to(reports::list_reports))
            .route("", web::post().to(reports::submit_report))
            .route("/missing", web::get().to(reports::get_missing_reports))
            .route("/{id}", web::get().to(reports::get_report))
            .route("/{id}", web::patch().to(reports::update_report)),
    );

    // ── Finance ledgers ──
    cfg.service(
        web::scope("/withdraws")
            .route("", web::get().to(withdraws::list_withdraws))
            .route("", web::post().to(withdraws::create_withdraw)),
    );
    cfg.service(
        web::scope("/expenditures")
            .route("", web::get().to(expenditures::list_expenditures))
            .route("", web::post().to(expenditures::create_expenditure)),
    );

    // ── Dashboard aggregates (Redis-cached) ──
    cfg.service(
        web::scope("/dashboard")
            .route("/summary", web::get().to(dashboard::summary))
            .route("/trends/daily", web::get().to(dashboard::daily_trends))
            .route("/trends/monthly", web::get().to(dashboard::monthly_trends))
            .route("/completion", web::get().to(dashboard::completion))
            .route("/leaderboard", web::get().to(dashboard::leaderboard))
            .route("/finances", web::get().to(dashboard::finances)),
    );

    // ── Alerting ──
    cfg.service(
        web::scope("/alerts")
            .route("/missing-reports", web::post().to(alerts::trigger_alert)),
    );
    cfg.service(
        web::scope("/cron")
            .route("/missing-reports", web::post().to(alerts::cron_trigger)),
    );

    // ── CSV exports ──
    cfg.service(
        web::scope("/exports")
            .route("/reports.csv", web::get().to(exports::reports_csv))
            .route("/accounts.csv", web::get().to(exports::accounts_csv)),
    );
}
