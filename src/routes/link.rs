use actix_web::web;

use crate::handlers::{
    delete_handler, get_link_handler, list_handler, redirect_handler, shorten_handler,
    stats_handler,
};

// Configure shortener routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Read endpoints consumed by the management client
    cfg.service(
        web::scope("/api")
            .route("/links", web::get().to(list_handler))
            .route("/links/{code}", web::get().to(get_link_handler))
            .route("/stats", web::get().to(stats_handler)),
    );

    cfg.route("/shorten", web::post().to(shorten_handler));

    // Code routes stay last so they cannot shadow the fixed paths above
    cfg.route("/{code}", web::get().to(redirect_handler));
    cfg.route("/{code}", web::delete().to(delete_handler));
}
