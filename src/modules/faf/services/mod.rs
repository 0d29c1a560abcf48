mod faf_csv;
mod faf_exporter;

pub use faf_csv::{convert_faf_to_csv, FAF_CSV_HEADER};
pub use faf_exporter::FafExporter;
