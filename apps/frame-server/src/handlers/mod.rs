//! HTTP handlers and route configuration.

mod auth;
mod health;
mod photos;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/photos", web::get().to(photos::list_photos)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/auth")
                    .route("/session", web::post().to(auth::create_session))
                    .route("/session", web::delete().to(auth::end_session)),
            ),
    );
}
