use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::Result;
use crate::modules::faf::controllers::ExportFafRequest;
use crate::modules::reports::services::VatReportService;

/// Revenue-stream VAT breakdown
/// GET /vat-report?startDate=&endDate=&spaId=
pub async fn vat_report(
    service: web::Data<Arc<VatReportService>>,
    query: web::Query<ExportFafRequest>,
) -> Result<HttpResponse> {
    let filters = query.into_inner().into_filters()?;

    let report = service.generate_vat_report(&filters).await.map_err(|e| {
        error!("VAT report failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(report))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/vat-report", web::get().to(vat_report));
}
