pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use actix_web::{middleware::Logger, web, App, HttpServer};

pub use application::purchase_service::{PurchaseReceipt, PurchaseService, SharedPurchaseService};

/// Register every route on an app. The app must carry a
/// `web::Data<SharedPurchaseService>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/purchases").route("", web::post().to(handlers::purchases::purchase_tickets)),
    )
    .route(
        "/tickets/prices",
        web::get().to(handlers::purchases::list_prices),
    )
    .route("/api-docs/openapi.json", web::get().to(handlers::openapi_json));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    service: SharedPurchaseService,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let service = web::Data::new(service);
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((host.to_string(), port))?
    .run())
}
