use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::core::{parse_date, AppError, Result};
use crate::modules::faf::models::FafFilters;
use crate::modules::faf::services::{convert_faf_to_csv, FafExporter};

/// Body of an export request; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFafRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub spa_id: Option<i64>,
}

impl ExportFafRequest {
    pub fn into_filters(self) -> Result<FafFilters> {
        let filters = FafFilters {
            start_date: optional_date("startDate", self.start_date)?,
            end_date: optional_date("endDate", self.end_date)?,
            spa_id: self.spa_id,
        };
        filters.validate()?;
        Ok(filters)
    }
}

fn optional_date(field: &str, value: Option<String>) -> Result<Option<chrono::NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_date(text)
            .map(Some)
            .ok_or_else(|| AppError::validation(format!("Invalid {}: {}", field, text))),
    }
}

/// Download name for a freshly generated export
pub fn faf_export_filename() -> String {
    format!("FAF_Export_{}.csv", chrono::Utc::now().timestamp_millis())
}

/// Generate the FTA Audit File as CSV
/// POST /export-faf
pub async fn export_faf(
    exporter: web::Data<Arc<FafExporter>>,
    request: web::Json<ExportFafRequest>,
) -> Result<HttpResponse> {
    let filters = request.into_inner().into_filters()?;

    let records = exporter.generate_faf_export(&filters).await.map_err(|e| {
        error!("FAF export failed: {}", e);
        e
    })?;

    let csv = convert_faf_to_csv(&records);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", faf_export_filename()),
        ))
        .body(csv))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/export-faf", web::post().to(export_faf));
}
