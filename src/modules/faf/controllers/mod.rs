mod faf_controller;

pub use faf_controller::{faf_export_filename, ExportFafRequest};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    faf_controller::configure(cfg);
}
