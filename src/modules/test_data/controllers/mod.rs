mod test_data_controller;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    test_data_controller::configure(cfg);
}
