use actix_web::{web, HttpResponse, Responder};

use crate::services::LinkService;
use crate::types::{AppState, HealthStatus, ResponsePayload};

mod link;

// Handler function for the root route "/"
async fn index() -> impl Responder {
    let welcome_message = ResponsePayload {
        status: 200,
        message: String::from("linkshort is running"),
    };

    // Return the struct as JSON
    HttpResponse::Ok().json(welcome_message)
}

// Handler function for the health check endpoint
async fn health_check(
    data: web::Data<AppState>,
    service: web::Data<LinkService>,
) -> impl Responder {
    // Calculate uptime in seconds
    let uptime = data.start_time.elapsed().as_secs();

    // A cheap aggregate query doubles as the store liveness probe
    let store = match service.stats().await {
        Ok(_) => String::from("ok"),
        Err(_) => String::from("unavailable"),
    };

    let status = HealthStatus {
        status: if store == "ok" { "OK" } else { "DEGRADED" }.to_string(),
        version: data.version.clone(),
        uptime_seconds: uptime,
        store,
    };

    // Return the status as JSON
    HttpResponse::Ok().json(status)
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.route("/health", web::get().to(health_check));

    // Register routes from individual modules
    link::configure(cfg);
}
