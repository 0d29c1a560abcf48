use std::sync::Arc;

use tracing::{info, warn};

use crate::core::Result;
use crate::modules::faf::models::FafFilters;
use crate::modules::faf::services::FafExporter;
use crate::modules::reports::models::VatReport;

/// Summarises the FAF export into the revenue-stream VAT report
pub struct VatReportService {
    exporter: Arc<FafExporter>,
}

impl VatReportService {
    pub fn new(exporter: Arc<FafExporter>) -> Self {
        Self { exporter }
    }

    pub async fn generate_vat_report(&self, filters: &FafFilters) -> Result<VatReport> {
        let records = self.exporter.generate_faf_export(filters).await?;
        let report = VatReport::from_records(filters, &records);

        if report.is_empty() {
            warn!(
                "Empty VAT report for start={:?}, end={:?}, spa={:?}",
                filters.start_date, filters.end_date, filters.spa_id
            );
        } else {
            info!(
                "VAT report generated: {} lines, VAT {}",
                report.total.count, report.total.vat_amount
            );
        }

        Ok(report)
    }
}
