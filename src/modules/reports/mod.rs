pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ReportStream, VatReport};
pub use services::VatReportService;
