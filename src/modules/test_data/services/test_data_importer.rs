use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::Currency;
use crate::modules::test_data::models::{
    validate_test_data_entry, LoyaltyCardEntry, NewLoyaltyCard, NewProductSale, NewTransaction,
    ProductSaleEntry, TestDataImportResult, TestDataTransaction, TransactionDetails,
    TransactionEntry,
};
use crate::modules::test_data::repositories::TestDataRepository;
use crate::modules::vat::models::VatCalculation;
use crate::modules::vat::services::calculate_vat;

const DEFAULT_QUANTITY: i32 = 1;
const DEFAULT_SOLD_BY: i64 = 1;
const DEFAULT_SESSIONS_INCLUDED: i32 = 10;
const DEFAULT_PAYMENT_METHOD: &str = "cash";
const DEFAULT_PRODUCT_NAME: &str = "FTA Test Product";
const IMPORTED_TRANSACTION_STATUS: &str = "completed";

/// Why a single entry did not make it into the store
#[derive(Debug)]
enum EntryFailure {
    /// Rejected before touching the store
    Rejected(String),
    /// The store refused the insert
    Persistence(String),
}

/// Imports FTA certification test transactions
///
/// Entries are processed one at a time in input order. A bad entry is skipped
/// and reported; it never aborts the rest of the batch.
pub struct TestDataImporter {
    repository: Arc<dyn TestDataRepository>,
}

impl TestDataImporter {
    pub fn new(repository: Arc<dyn TestDataRepository>) -> Self {
        Self { repository }
    }

    /// Import raw JSON text: either an array of entries or `{"transactions": [...]}`
    pub async fn import_from_json(&self, json_content: &str) -> TestDataImportResult {
        let parsed: Value = match serde_json::from_str(json_content) {
            Ok(value) => value,
            Err(e) => {
                warn!("Test data import rejected, invalid JSON: {}", e);
                return TestDataImportResult::failed(format!("Failed to parse JSON: {}", e));
            }
        };

        let entries = match parsed {
            Value::Array(entries) => entries,
            Value::Object(mut object) => match object.remove("transactions") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return TestDataImportResult::failed(
                        "Invalid test data format: expected a \"transactions\" array",
                    )
                }
            },
            _ => {
                return TestDataImportResult::failed(
                    "Invalid test data format: expected an array of transactions",
                )
            }
        };

        self.import_fta_test_data(&entries).await
    }

    /// Import already-typed transactions, e.g. the built-in sample set
    pub async fn import_transactions(
        &self,
        transactions: &[TestDataTransaction],
    ) -> TestDataImportResult {
        let mut entries = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            match serde_json::to_value(transaction) {
                Ok(value) => entries.push(value),
                Err(e) => {
                    return TestDataImportResult::failed(format!(
                        "Failed to encode test transaction: {}",
                        e
                    ))
                }
            }
        }

        self.import_fta_test_data(&entries).await
    }

    /// Validate, split VAT and persist each entry
    pub async fn import_fta_test_data(&self, entries: &[Value]) -> TestDataImportResult {
        let mut result = TestDataImportResult::new();

        for (index, entry) in entries.iter().enumerate() {
            match self.import_entry(index, entry).await {
                Ok(id) => {
                    debug!(index, id, "Imported test entry");
                    result.record_imported();
                }
                Err(EntryFailure::Rejected(error)) => {
                    warn!(index, "Skipped test entry: {}", error);
                    result.record_skipped(error);
                }
                Err(EntryFailure::Persistence(error)) => {
                    warn!(index, "Failed to persist test entry: {}", error);
                    result.record_persistence_failure(error);
                }
            }
        }

        info!(
            "Test data import finished: imported={}, skipped={}, success={}",
            result.imported, result.skipped, result.success
        );

        result
    }

    async fn import_entry(&self, index: usize, entry: &Value) -> Result<u64, EntryFailure> {
        let validation = validate_test_data_entry(entry);
        if !validation.valid {
            return Err(EntryFailure::Rejected(format!(
                "Invalid entry at index {}: {}",
                index,
                validation.errors.join(", ")
            )));
        }

        // Validation guarantees a string type
        let kind = entry["type"].as_str().unwrap_or_default();
        if !TransactionDetails::is_supported(kind) {
            return Err(EntryFailure::Rejected(format!(
                "Unsupported transaction type: {}",
                kind
            )));
        }

        let transaction: TestDataTransaction = serde_json::from_value(entry.clone())
            .map_err(|e| {
                EntryFailure::Rejected(format!("Invalid entry at index {}: {}", index, e))
            })?;

        let vat = calculate_vat(transaction.amount, transaction.tax_code()).map_err(|e| {
            EntryFailure::Rejected(format!("Invalid entry at index {}: {}", index, e))
        })?;

        debug!(
            index,
            kind,
            spa_id = ?transaction.spa_id,
            net = %vat.net_amount,
            vat = %vat.vat_amount,
            "Calculated VAT for test entry"
        );

        let persisted = match &transaction.details {
            TransactionDetails::ProductSale(sale) => {
                let row = product_sale_row(&transaction, sale, &vat)?;
                self.repository.insert_product_sale(&row).await
            }
            TransactionDetails::LoyaltyCard(card) => {
                let row = loyalty_card_row(&transaction, card, &vat)?;
                self.repository.insert_loyalty_card(&row).await
            }
            TransactionDetails::Transaction(payment) => {
                let row = transaction_row(&transaction, payment)?;
                self.repository.insert_transaction(&row).await
            }
        };

        persisted.map_err(|e| {
            EntryFailure::Persistence(format!(
                "Failed to import entry at index {}: {}",
                index, e
            ))
        })
    }
}

fn product_sale_row(
    transaction: &TestDataTransaction,
    sale: &ProductSaleEntry,
    vat: &VatCalculation,
) -> Result<NewProductSale, EntryFailure> {
    let quantity = sale.quantity.unwrap_or(DEFAULT_QUANTITY);
    if quantity < 1 {
        return Err(EntryFailure::Rejected(format!(
            "Quantity must be at least 1, got {}",
            quantity
        )));
    }

    Ok(NewProductSale {
        product_name: sale
            .product_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
        customer_id: transaction.customer_id,
        quantity,
        unit_price: Currency::AED.round(transaction.amount / Decimal::from(quantity)),
        total_price: transaction.amount,
        net_amount: vat.net_amount,
        vat_amount: vat.vat_amount,
        tax_code: transaction.tax_code(),
        sold_by: sale.sold_by.unwrap_or(DEFAULT_SOLD_BY),
        sale_date: sale_date(transaction)?,
        notes: transaction.description.clone(),
    })
}

fn loyalty_card_row(
    transaction: &TestDataTransaction,
    card: &LoyaltyCardEntry,
    vat: &VatCalculation,
) -> Result<NewLoyaltyCard, EntryFailure> {
    Ok(NewLoyaltyCard {
        customer_id: transaction.customer_id,
        service_id: card.service_id,
        sessions_included: card.sessions_included.unwrap_or(DEFAULT_SESSIONS_INCLUDED),
        purchase_price: transaction.amount,
        net_amount: vat.net_amount,
        vat_amount: vat.vat_amount,
        tax_code: transaction.tax_code(),
        purchase_date: sale_date(transaction)?,
    })
}

fn transaction_row(
    transaction: &TestDataTransaction,
    payment: &TransactionEntry,
) -> Result<NewTransaction, EntryFailure> {
    let invoice_id = payment.invoice_id.ok_or_else(|| {
        EntryFailure::Rejected("Transaction requires invoiceId".to_string())
    })?;

    Ok(NewTransaction {
        invoice_id,
        amount: transaction.amount,
        payment_method: payment
            .payment_method
            .clone()
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        status: IMPORTED_TRANSACTION_STATUS.to_string(),
        reference: transaction.description.clone(),
        transaction_date: sale_date(transaction)?,
    })
}

fn sale_date(transaction: &TestDataTransaction) -> Result<chrono::NaiveDate, EntryFailure> {
    transaction
        .transaction_date()
        .ok_or_else(|| EntryFailure::Rejected(format!("Invalid date: {}", transaction.date)))
}
