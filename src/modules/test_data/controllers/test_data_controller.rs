//! Admin endpoints for the FTA certification test data.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::modules::test_data::services::{generate_sample_test_data, TestDataImporter};

/// Import raw JSON test data
/// POST /test-data/import
///
/// The body is read as text so malformed JSON ends up in the import result
/// instead of being rejected by the extractor.
pub async fn import_test_data(
    importer: web::Data<Arc<TestDataImporter>>,
    body: String,
) -> HttpResponse {
    let result = importer.import_from_json(&body).await;
    HttpResponse::Ok().json(result)
}

/// Show the built-in sample batch
/// GET /test-data/sample
pub async fn sample_test_data() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "transactions": generate_sample_test_data(),
    }))
}

/// Import the built-in sample batch
/// POST /test-data/import-sample
pub async fn import_sample_test_data(importer: web::Data<Arc<TestDataImporter>>) -> HttpResponse {
    let result = importer
        .import_transactions(&generate_sample_test_data())
        .await;
    HttpResponse::Ok().json(result)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test-data")
            .route("/import", web::post().to(import_test_data))
            .route("/sample", web::get().to(sample_test_data))
            .route("/import-sample", web::post().to(import_sample_test_data)),
    );
}
