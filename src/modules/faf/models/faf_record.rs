use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Currency, Result};
use crate::modules::vat::models::TaxCode;

/// Revenue stream a FAF line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FafTransactionType {
    Booking,
    ProductSale,
    LoyaltyCard,
    Invoice,
    Transaction,
}

impl FafTransactionType {
    /// Prefix of the exported transaction id
    pub fn id_prefix(&self) -> &'static str {
        match self {
            FafTransactionType::Booking => "BK",
            FafTransactionType::ProductSale => "PS",
            FafTransactionType::LoyaltyCard => "LC",
            FafTransactionType::Invoice => "INV",
            FafTransactionType::Transaction => "TXN",
        }
    }

    pub fn transaction_id(&self, id: i64) -> String {
        format!("{}-{}", self.id_prefix(), id)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FafTransactionType::Booking => "booking",
            FafTransactionType::ProductSale => "product_sale",
            FafTransactionType::LoyaltyCard => "loyalty_card",
            FafTransactionType::Invoice => "invoice",
            FafTransactionType::Transaction => "transaction",
        }
    }
}

impl fmt::Display for FafTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized line of the FTA audit file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FafRecord {
    pub transaction_id: String,
    pub transaction_date: NaiveDate,
    pub transaction_type: FafTransactionType,
    /// 0 when the source row has no customer
    pub customer_id: i64,
    pub gross_amount: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub tax_code: TaxCode,
    pub currency: Currency,
    pub description: String,
}

/// Optional scoping of an export; date bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FafFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub spa_id: Option<i64>,
}

impl FafFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn between(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn for_spa(mut self, spa_id: i64) -> Self {
        self.spa_id = Some(spa_id);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AppError::validation(format!(
                    "startDate ({}) must be on or before endDate ({})",
                    start, end
                )));
            }
        }
        Ok(())
    }
}
