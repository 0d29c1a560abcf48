mod health_controller;

pub use health_controller::{HealthResponse, ReadinessResponse};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health_controller::configure(cfg);
}
