//! Rows read from the five revenue-stream tables.
//!
//! Bookings, invoices and transactions store only a gross figure, so their VAT
//! is derived at export time at the standard rate. Product sales and loyalty
//! cards carry the split computed when they were created.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::str::FromStr;

use crate::core::{AppError, Currency, Result};
use crate::modules::faf::models::{FafRecord, FafTransactionType};
use crate::modules::vat::models::{TaxCode, VatCalculation};
use crate::modules::vat::services::calculate_vat;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BookingRow {
    pub id: i64,
    pub customer_id: i64,
    pub booking_date: NaiveDate,
    pub total_amount: Decimal,
    pub service_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductSaleRow {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub sale_date: NaiveDate,
    pub product_name: String,
    pub quantity: i32,
    pub total_price: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub tax_code: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct LoyaltyCardRow {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub purchase_date: NaiveDate,
    pub sessions_included: i32,
    pub purchase_price: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub tax_code: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InvoiceRow {
    pub id: i64,
    pub customer_id: i64,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub invoice_id: i64,
    pub transaction_date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
}

impl BookingRow {
    pub fn into_faf_record(self) -> Result<FafRecord> {
        let kind = FafTransactionType::Booking;
        let vat = derive_standard_rate(kind, self.id, self.total_amount)?;
        let description = match self.service_name {
            Some(service) => format!("Spa booking - {}", service),
            None => "Spa booking".to_string(),
        };

        Ok(record(kind, self.id, self.booking_date, self.customer_id, vat, TaxCode::SR, description))
    }
}

impl ProductSaleRow {
    pub fn into_faf_record(self) -> Result<FafRecord> {
        let kind = FafTransactionType::ProductSale;
        let tax_code = stored_tax_code(kind, self.id, &self.tax_code)?;
        let vat = VatCalculation::new(self.net_amount, self.vat_amount, self.total_price);
        let description = format!("Product sale - {} x{}", self.product_name, self.quantity);

        Ok(record(
            kind,
            self.id,
            self.sale_date,
            self.customer_id.unwrap_or(0),
            vat,
            tax_code,
            description,
        ))
    }
}

impl LoyaltyCardRow {
    pub fn into_faf_record(self) -> Result<FafRecord> {
        let kind = FafTransactionType::LoyaltyCard;
        let tax_code = stored_tax_code(kind, self.id, &self.tax_code)?;
        let vat = VatCalculation::new(self.net_amount, self.vat_amount, self.purchase_price);
        let description = format!("Loyalty card - {} sessions", self.sessions_included);

        Ok(record(
            kind,
            self.id,
            self.purchase_date,
            self.customer_id.unwrap_or(0),
            vat,
            tax_code,
            description,
        ))
    }
}

impl InvoiceRow {
    pub fn into_faf_record(self) -> Result<FafRecord> {
        let kind = FafTransactionType::Invoice;
        let vat = derive_standard_rate(kind, self.id, self.total_amount)?;
        let description = format!("Invoice {}", self.invoice_number);

        Ok(record(kind, self.id, self.invoice_date, self.customer_id, vat, TaxCode::SR, description))
    }
}

impl TransactionRow {
    /// Transactions have no customer link, so the customer id is always 0
    pub fn into_faf_record(self) -> Result<FafRecord> {
        let kind = FafTransactionType::Transaction;
        let vat = derive_standard_rate(kind, self.id, self.amount)?;
        let description = format!(
            "Payment ({}) for invoice {}",
            self.payment_method, self.invoice_id
        );

        Ok(record(kind, self.id, self.transaction_date, 0, vat, TaxCode::SR, description))
    }
}

fn record(
    kind: FafTransactionType,
    id: i64,
    transaction_date: NaiveDate,
    customer_id: i64,
    vat: VatCalculation,
    tax_code: TaxCode,
    description: String,
) -> FafRecord {
    FafRecord {
        transaction_id: kind.transaction_id(id),
        transaction_date,
        transaction_type: kind,
        customer_id,
        gross_amount: vat.total,
        net_amount: vat.net_amount,
        vat_amount: vat.vat_amount,
        tax_code,
        currency: Currency::AED,
        description,
    }
}

fn derive_standard_rate(kind: FafTransactionType, id: i64, gross: Decimal) -> Result<VatCalculation> {
    calculate_vat(gross, TaxCode::SR).map_err(|e| {
        AppError::internal(format!("{} {}: {}", kind, kind.transaction_id(id), e))
    })
}

fn stored_tax_code(kind: FafTransactionType, id: i64, code: &str) -> Result<TaxCode> {
    TaxCode::from_str(code).map_err(|e| {
        AppError::internal(format!("{} {}: {}", kind, kind.transaction_id(id), e))
    })
}
