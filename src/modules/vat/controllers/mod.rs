mod vat_controller;

pub use vat_controller::{CalculateVatRequest, CalculationMode};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    vat_controller::configure(cfg);
}
