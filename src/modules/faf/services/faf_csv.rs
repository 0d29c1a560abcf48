//! FAF CSV rendering.
//!
//! Only the description column is quoted, so rows are assembled by hand rather
//! than through a general CSV writer.

use crate::modules::faf::models::FafRecord;

pub const FAF_CSV_HEADER: &str = "Transaction ID,Date,Type,Customer ID,Gross Amount (AED),Net Amount (AED),VAT Amount (AED),Tax Code,Currency,Description";

/// Render records as CSV: header first, LF separated, no trailing newline
pub fn convert_faf_to_csv(records: &[FafRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(FAF_CSV_HEADER.to_string());
    lines.extend(records.iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(record: &FafRecord) -> String {
    let currency = record.currency;
    [
        record.transaction_id.clone(),
        record.transaction_date.format("%Y-%m-%d").to_string(),
        record.transaction_type.to_string(),
        record.customer_id.to_string(),
        currency.format_amount(record.gross_amount),
        currency.format_amount(record.net_amount),
        currency.format_amount(record.vat_amount),
        record.tax_code.to_string(),
        currency.to_string(),
        quote(&record.description),
    ]
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
