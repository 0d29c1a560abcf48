//! FTA certification test transactions.
//!
//! Entries arrive as untyped JSON. They are validated field by field first so
//! every problem with a record can be reported at once, and only then converted
//! into the typed [`TestDataTransaction`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::core::parse_date;
use crate::modules::vat::models::TaxCode;

/// A validated test transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDataTransaction {
    #[serde(flatten)]
    pub details: TransactionDetails,
    /// ISO date (`2024-01-15`) or RFC 3339 timestamp, as supplied
    pub date: String,
    /// VAT-inclusive amount in AED
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<TaxCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spa_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Type-specific fields, tagged by the `type` field of the entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionDetails {
    ProductSale(ProductSaleEntry),
    LoyaltyCard(LoyaltyCardEntry),
    Transaction(TransactionEntry),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSaleEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Staff member who made the sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_by: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCardEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_included: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl TransactionDetails {
    pub const SUPPORTED_TYPES: [&'static str; 3] = ["product_sale", "loyalty_card", "transaction"];

    pub fn is_supported(kind: &str) -> bool {
        Self::SUPPORTED_TYPES.contains(&kind)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TransactionDetails::ProductSale(_) => "product_sale",
            TransactionDetails::LoyaltyCard(_) => "loyalty_card",
            TransactionDetails::Transaction(_) => "transaction",
        }
    }
}

impl TestDataTransaction {
    pub fn tax_code(&self) -> TaxCode {
        self.tax_code.unwrap_or_default()
    }

    pub fn transaction_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Outcome of checking one raw entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl EntryValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Check a raw entry, accumulating every problem found
pub fn validate_test_data_entry(entry: &Value) -> EntryValidation {
    let Some(fields) = entry.as_object() else {
        return EntryValidation::from_errors(vec!["Entry must be a JSON object".to_string()]);
    };

    let mut errors = Vec::new();

    match fields.get("type") {
        None | Some(Value::Null) => errors.push("Missing required field: type".to_string()),
        Some(Value::String(kind)) if kind.trim().is_empty() => {
            errors.push("Missing required field: type".to_string())
        }
        Some(Value::String(_)) => {}
        Some(other) => errors.push(format!("Field type must be a string, got {}", other)),
    }

    match fields.get("date") {
        None | Some(Value::Null) => errors.push("Missing required field: date".to_string()),
        Some(Value::String(date)) => {
            if parse_date(date).is_none() {
                errors.push(format!("Invalid date: {}", date));
            }
        }
        Some(other) => errors.push(format!("Invalid date: {}", other)),
    }

    match fields.get("amount") {
        None | Some(Value::Null) => errors.push("Missing required field: amount".to_string()),
        Some(Value::Number(number)) => match number_to_decimal(number) {
            Some(amount) if amount < Decimal::ZERO => {
                errors.push(format!("Amount must be non-negative, got {}", amount))
            }
            Some(_) => {}
            None => errors.push(format!("Amount must be a number, got {}", number)),
        },
        Some(other) => errors.push(format!("Amount must be a number, got {}", other)),
    }

    match fields.get("taxCode") {
        None | Some(Value::Null) => {}
        Some(Value::String(code)) => {
            if let Err(e) = TaxCode::from_str(code) {
                errors.push(e);
            }
        }
        Some(other) => errors.push(format!(
            "Invalid tax code: {}. Must be one of SR, ZR, ES, OP",
            other
        )),
    }

    EntryValidation::from_errors(errors)
}

fn number_to_decimal(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
