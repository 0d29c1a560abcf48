mod vat_report;

pub use vat_report::{ReportStream, StreamSummary, VatReport, VatTotals};
