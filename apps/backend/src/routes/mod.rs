use actix_web::web;

pub mod health;
pub mod matches;

/// Configure application routes.
///
/// `main.rs` wires these under the CORS middleware; tests register the
/// same paths directly so endpoint behavior can be exercised without the
/// HttpServer wrapper.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Match routes: /api/matches/**
    cfg.service(web::scope("/api/matches").configure(matches::configure_routes));
}
