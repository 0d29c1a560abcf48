mod vat_report_controller;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    vat_report_controller::configure(cfg);
}
