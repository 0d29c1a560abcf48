mod import_result;
mod new_rows;
mod test_data_entry;

pub use import_result::TestDataImportResult;
pub use new_rows::{NewLoyaltyCard, NewProductSale, NewTransaction};
pub use test_data_entry::{
    validate_test_data_entry, EntryValidation, LoyaltyCardEntry,
    ProductSaleEntry, TestDataTransaction, TransactionDetails, TransactionEntry,
};
