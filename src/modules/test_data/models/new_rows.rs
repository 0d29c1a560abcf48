use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::vat::models::TaxCode;

/// Product sale row ready for insertion, VAT already split
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductSale {
    pub product_name: String,
    pub customer_id: Option<i64>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub tax_code: TaxCode,
    pub sold_by: i64,
    pub sale_date: NaiveDate,
    pub notes: Option<String>,
}

/// Loyalty card row ready for insertion, VAT already split
#[derive(Debug, Clone, PartialEq)]
pub struct NewLoyaltyCard {
    pub customer_id: Option<i64>,
    pub service_id: Option<i64>,
    pub sessions_included: i32,
    pub purchase_price: Decimal,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub tax_code: TaxCode,
    pub purchase_date: NaiveDate,
}

/// Payment transaction row; always linked to an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub invoice_id: i64,
    pub amount: Decimal,
    pub payment_method: String,
    pub status: String,
    pub reference: Option<String>,
    pub transaction_date: NaiveDate,
}
