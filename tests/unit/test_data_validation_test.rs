// Test-data validation and import behaviour against an in-memory store

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use spa_compliance::core::{AppError, Result};
use spa_compliance::test_data::models::{
    validate_test_data_entry, NewLoyaltyCard, NewProductSale, NewTransaction,
};
use spa_compliance::test_data::{generate_sample_test_data, TestDataImporter, TestDataRepository};
use spa_compliance::vat::TaxCode;

#[derive(Default)]
struct InMemoryStore {
    product_sales: Mutex<Vec<NewProductSale>>,
    loyalty_cards: Mutex<Vec<NewLoyaltyCard>>,
    transactions: Mutex<Vec<NewTransaction>>,
    fail_loyalty_cards: bool,
}

#[async_trait]
impl TestDataRepository for InMemoryStore {
    async fn insert_product_sale(&self, sale: &NewProductSale) -> Result<u64> {
        let mut rows = self.product_sales.lock().unwrap();
        rows.push(sale.clone());
        Ok(rows.len() as u64)
    }

    async fn insert_loyalty_card(&self, card: &NewLoyaltyCard) -> Result<u64> {
        if self.fail_loyalty_cards {
            return Err(AppError::internal("loyalty_cards is read-only"));
        }
        let mut rows = self.loyalty_cards.lock().unwrap();
        rows.push(card.clone());
        Ok(rows.len() as u64)
    }

    async fn insert_transaction(&self, transaction: &NewTransaction) -> Result<u64> {
        let mut rows = self.transactions.lock().unwrap();
        rows.push(transaction.clone());
        Ok(rows.len() as u64)
    }
}

fn importer() -> (Arc<InMemoryStore>, TestDataImporter) {
    let store = Arc::new(InMemoryStore::default());
    (store.clone(), TestDataImporter::new(store))
}

#[tokio::test]
async fn test_bad_amount_is_skipped_and_batch_continues() {
    let (store, importer) = importer();
    let entries = vec![
        json!({"type": "product_sale", "date": "2024-01-15", "amount": 105}),
        json!({"type": "loyalty_card", "date": "2024-01-16", "amount": 1050, "serviceId": 1}),
        json!({"type": "product_sale", "date": "2024-01-17", "amount": -5}),
        json!({"type": "transaction", "date": "2024-01-18", "amount": 210, "invoiceId": 4}),
    ];

    let result = importer.import_fta_test_data(&entries).await;

    assert!(result.success);
    assert_eq!(result.imported, 3);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("index 2"));
    assert!(result.errors[0].contains("Amount must be non-negative"));
    assert_eq!(store.product_sales.lock().unwrap().len(), 1);
    assert_eq!(store.loyalty_cards.lock().unwrap().len(), 1);
    assert_eq!(store.transactions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_transaction_without_invoice_is_not_persisted() {
    let (store, importer) = importer();
    let entries = vec![json!({"type": "transaction", "date": "2024-01-18", "amount": 210})];

    let result = importer.import_fta_test_data(&entries).await;

    assert_eq!(result.imported, 0);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.errors, vec!["Transaction requires invoiceId"]);
    assert!(store.transactions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_type() {
    let (_, importer) = importer();
    let entries = vec![json!({"type": "refund", "date": "2024-01-18", "amount": 10})];

    let result = importer.import_fta_test_data(&entries).await;

    assert!(result.success);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.errors, vec!["Unsupported transaction type: refund"]);
}

#[tokio::test]
async fn test_invalid_json_fails_whole_import() {
    let (_, importer) = importer();

    let result = importer.import_from_json("not valid json").await;

    assert!(!result.success);
    assert_eq!(result.imported, 0);
    assert_eq!(result.skipped, 0);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Failed to parse JSON"));
}

#[tokio::test]
async fn test_import_from_json_accepts_both_shapes() {
    let (_, importer) = importer();
    let entry = json!({"type": "product_sale", "date": "2024-01-15", "amount": 50, "taxCode": "ZR"});

    let bare = importer
        .import_from_json(&Value::Array(vec![entry.clone()]).to_string())
        .await;
    let wrapped = importer
        .import_from_json(&json!({"transactions": [entry]}).to_string())
        .await;

    assert_eq!(bare.imported, 1);
    assert_eq!(wrapped.imported, 1);
}

#[tokio::test]
async fn test_persistence_failure_flips_success_but_continues() {
    let store = Arc::new(InMemoryStore {
        fail_loyalty_cards: true,
        ..Default::default()
    });
    let importer = TestDataImporter::new(store.clone());
    let entries = vec![
        json!({"type": "loyalty_card", "date": "2024-01-16", "amount": 1050}),
        json!({"type": "product_sale", "date": "2024-01-17", "amount": 21}),
    ];

    let result = importer.import_fta_test_data(&entries).await;

    assert!(!result.success);
    assert_eq!(result.imported, 1);
    assert_eq!(result.skipped, 1);
    assert!(result.errors[0].starts_with("Failed to import entry at index 0"));
    assert_eq!(store.product_sales.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_product_sale_row_values() {
    let (store, importer) = importer();
    let entries = vec![json!({
        "type": "product_sale",
        "date": "2024-01-15T10:30:00Z",
        "amount": 100,
        "quantity": 3,
        "productName": "Rose Hip Oil",
        "customerId": 9
    })];

    importer.import_fta_test_data(&entries).await;

    let sales = store.product_sales.lock().unwrap();
    let sale = &sales[0];
    assert_eq!(sale.product_name, "Rose Hip Oil");
    assert_eq!(sale.quantity, 3);
    assert_eq!(sale.unit_price, dec!(33.33));
    assert_eq!(sale.total_price, dec!(100));
    assert_eq!(sale.net_amount, dec!(95.24));
    assert_eq!(sale.vat_amount, dec!(4.76));
    assert_eq!(sale.tax_code, TaxCode::SR);
    assert_eq!(sale.sold_by, 1);
    assert_eq!(sale.customer_id, Some(9));
    assert_eq!(sale.sale_date.to_string(), "2024-01-15");
}

#[tokio::test]
async fn test_loyalty_card_and_payment_defaults() {
    let (store, importer) = importer();
    let entries = vec![
        json!({"type": "loyalty_card", "date": "2024-01-16", "amount": 500, "taxCode": "ES"}),
        json!({"type": "transaction", "date": "2024-01-18", "amount": 210, "invoiceId": 4}),
    ];

    importer.import_fta_test_data(&entries).await;

    let cards = store.loyalty_cards.lock().unwrap();
    assert_eq!(cards[0].sessions_included, 10);
    assert_eq!(cards[0].vat_amount, dec!(0));
    assert_eq!(cards[0].net_amount, dec!(500));

    let payments = store.transactions.lock().unwrap();
    assert_eq!(payments[0].invoice_id, 4);
    assert_eq!(payments[0].payment_method, "cash");
    assert_eq!(payments[0].status, "completed");
}

#[tokio::test]
async fn test_sample_batch_imports_cleanly() {
    let (_, importer) = importer();

    let result = importer
        .import_transactions(&generate_sample_test_data())
        .await;

    assert!(result.success);
    assert_eq!(result.imported, generate_sample_test_data().len());
    assert!(result.errors.is_empty());
}

#[test]
fn test_validation_reports_every_problem() {
    let validation = validate_test_data_entry(&json!({"amount": "ten", "taxCode": "VAT"}));

    assert!(!validation.valid);
    assert_eq!(validation.errors.len(), 4);
}

#[test]
fn test_fractional_second_timestamp_is_a_valid_date() {
    let entry = json!({
        "type": "product_sale",
        "date": "2024-03-09T10:30:00.123",
        "amount": 21,
    });

    assert!(validate_test_data_entry(&entry).valid);
}

proptest! {
    #[test]
    fn test_negative_amounts_always_invalid(cents in 1i64..1_000_000_000i64) {
        let entry = json!({
            "type": "product_sale",
            "date": "2024-01-15",
            "amount": -(cents as f64) / 100.0,
        });

        let validation = validate_test_data_entry(&entry);

        prop_assert!(!validation.valid);
        prop_assert!(validation.errors.iter().any(|e| e.starts_with("Amount must be non-negative")));
    }

    #[test]
    fn test_non_negative_amounts_valid_for_every_code(
        cents in 0i64..1_000_000_000i64,
        code in prop_oneof![Just("SR"), Just("ZR"), Just("ES"), Just("OP")]
    ) {
        let entry = json!({
            "type": "loyalty_card",
            "date": "2024-03-01",
            "amount": cents as f64 / 100.0,
            "taxCode": code,
        });

        prop_assert!(validate_test_data_entry(&entry).valid);
    }

    #[test]
    fn test_unknown_tax_codes_invalid(code in "[A-Z]{2}") {
        prop_assume!(!["SR", "ZR", "ES", "OP"].contains(&code.as_str()));
        let entry = json!({
            "type": "product_sale",
            "date": "2024-01-15",
            "amount": 1,
            "taxCode": code,
        });

        let validation = validate_test_data_entry(&entry);

        prop_assert!(!validation.valid);
        prop_assert_eq!(validation.errors.len(), 1);
    }
}
