mod faf_record;
mod source_rows;

pub use faf_record::{FafFilters, FafRecord, FafTransactionType};
pub use source_rows::{BookingRow, InvoiceRow, LoyaltyCardRow, ProductSaleRow, TransactionRow};
