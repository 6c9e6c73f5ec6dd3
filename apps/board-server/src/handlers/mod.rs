//! HTTP handlers and route configuration.

mod health;
mod notifications;
mod updates;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/updates")
                    .route("", web::get().to(updates::list))
                    .route("", web::post().to(updates::create))
                    .route("/{id}", web::delete().to(updates::delete)),
            )
            .service(
                web::scope("/notifications")
                    .route("", web::get().to(notifications::permission_state))
                    .route(
                        "/permission",
                        web::post().to(notifications::request_permission),
                    ),
            ),
    );
}
