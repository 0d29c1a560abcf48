use rust_decimal::Decimal;

use crate::modules::test_data::models::{
    LoyaltyCardEntry, ProductSaleEntry, TestDataTransaction, TransactionDetails, TransactionEntry,
};
use crate::modules::vat::models::TaxCode;

/// Fixed smoke-test batch covering every supported type and tax code
pub fn generate_sample_test_data() -> Vec<TestDataTransaction> {
    vec![
        sample(
            TransactionDetails::ProductSale(ProductSaleEntry {
                product_name: Some("Lavender Massage Oil".to_string()),
                quantity: Some(2),
                sold_by: Some(1),
            }),
            "2024-01-15",
            Decimal::new(10500, 2),
            Some(TaxCode::SR),
            Some(1),
            "Standard-rated retail sale",
        ),
        sample(
            TransactionDetails::ProductSale(ProductSaleEntry {
                product_name: Some("Medical Compression Sleeve".to_string()),
                quantity: Some(1),
                sold_by: Some(1),
            }),
            "2024-01-18",
            Decimal::new(25000, 2),
            Some(TaxCode::ZR),
            Some(2),
            "Zero-rated medical supply",
        ),
        sample(
            TransactionDetails::LoyaltyCard(LoyaltyCardEntry {
                service_id: Some(1),
                sessions_included: Some(10),
            }),
            "2024-01-20",
            Decimal::new(105000, 2),
            Some(TaxCode::SR),
            Some(1),
            "Ten-session massage package",
        ),
        sample(
            TransactionDetails::LoyaltyCard(LoyaltyCardEntry {
                service_id: Some(2),
                sessions_included: Some(5),
            }),
            "2024-02-02",
            Decimal::new(40000, 2),
            Some(TaxCode::ES),
            Some(3),
            "Exempt wellness programme",
        ),
        sample(
            TransactionDetails::Transaction(TransactionEntry {
                invoice_id: Some(1),
                payment_method: Some("card".to_string()),
            }),
            "2024-02-05",
            Decimal::new(21000, 2),
            None,
            Some(1),
            "Card payment against invoice 1",
        ),
        sample(
            TransactionDetails::Transaction(TransactionEntry {
                invoice_id: Some(1),
                payment_method: Some("cash".to_string()),
            }),
            "2024-02-06",
            Decimal::new(5000, 2),
            Some(TaxCode::OP),
            Some(1),
            "Out-of-scope deposit",
        ),
    ]
}

fn sample(
    details: TransactionDetails,
    date: &str,
    amount: Decimal,
    tax_code: Option<TaxCode>,
    customer_id: Option<i64>,
    description: &str,
) -> TestDataTransaction {
    TestDataTransaction {
        details,
        date: date.to_string(),
        amount,
        tax_code,
        customer_id,
        spa_id: Some(1),
        description: Some(description.to_string()),
    }
}
