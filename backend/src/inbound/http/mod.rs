//! HTTP inbound adapter exposing the REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod jobs;
pub mod state;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register every route plus the body and query extractor settings.
///
/// JSON bodies are parsed whatever their `Content-Type` says. Each path
/// answers unsupported methods with a 405 error envelope. Handlers expect
/// [`state::HttpState`] and [`health::HealthState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json = web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(error::json_error_handler);
    cfg.app_data(json)
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(
            web::scope("/api/v1")
                .service(
                    web::resource("/register")
                        .route(web::post().to(users::register))
                        .default_service(web::to(error::method_not_allowed)),
                )
                .service(
                    web::resource("/login")
                        .route(web::post().to(users::login))
                        .default_service(web::to(error::method_not_allowed)),
                )
                .service(
                    web::resource("/jobs")
                        .route(web::post().to(jobs::create_job))
                        .route(web::get().to(jobs::list_jobs))
                        .default_service(web::to(error::method_not_allowed)),
                ),
        )
        .service(
            web::resource("/healthz")
                .route(web::get().to(health::healthz))
                .default_service(web::to(error::method_not_allowed)),
        )
        .service(
            web::resource("/health/ready")
                .route(web::get().to(health::ready))
                .default_service(web::to(error::method_not_allowed)),
        )
        .service(
            web::resource("/health/live")
                .route(web::get().to(health::live))
                .default_service(web::to(error::method_not_allowed)),
        );
}
