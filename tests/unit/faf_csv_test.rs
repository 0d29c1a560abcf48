// FAF CSV format: header, column order, quoting and amount formatting

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use spa_compliance::core::Currency;
use spa_compliance::faf::services::FAF_CSV_HEADER;
use spa_compliance::faf::{convert_faf_to_csv, FafRecord, FafTransactionType};
use spa_compliance::vat::TaxCode;

fn record(id: &str, kind: FafTransactionType, description: &str) -> FafRecord {
    FafRecord {
        transaction_id: id.to_string(),
        transaction_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        transaction_type: kind,
        customer_id: 12,
        gross_amount: dec!(50),
        net_amount: dec!(47.62),
        vat_amount: dec!(2.38),
        tax_code: TaxCode::SR,
        currency: Currency::AED,
        description: description.to_string(),
    }
}

#[test]
fn test_header_columns() {
    let columns: Vec<&str> = FAF_CSV_HEADER.split(',').collect();

    assert_eq!(
        columns,
        vec![
            "Transaction ID",
            "Date",
            "Type",
            "Customer ID",
            "Gross Amount (AED)",
            "Net Amount (AED)",
            "VAT Amount (AED)",
            "Tax Code",
            "Currency",
            "Description",
        ]
    );
}

#[test]
fn test_embedded_quotes_are_doubled() {
    let csv = convert_faf_to_csv(&[record(
        "PS-1",
        FafTransactionType::ProductSale,
        "He said \"hi\"",
    )]);

    let row = csv.lines().nth(1).unwrap();
    assert!(row.ends_with(r#","He said ""hi""""#));
}

#[test]
fn test_full_document() {
    let records = vec![
        record("PS-7", FafTransactionType::ProductSale, "Product sale - Argan Oil x1"),
        record("TXN-3", FafTransactionType::Transaction, "Payment (card) for invoice 2"),
    ];

    let csv = convert_faf_to_csv(&records);

    assert_eq!(
        csv,
        format!(
            "{}\n\
             PS-7,2024-02-29,product_sale,12,50.00,47.62,2.38,SR,AED,\"Product sale - Argan Oil x1\"\n\
             TXN-3,2024-02-29,transaction,12,50.00,47.62,2.38,SR,AED,\"Payment (card) for invoice 2\"",
            FAF_CSV_HEADER
        )
    );
}

#[test]
fn test_zero_amounts_keep_two_decimals() {
    let mut zero_rated = record("LC-1", FafTransactionType::LoyaltyCard, "Loyalty card - 5 sessions");
    zero_rated.tax_code = TaxCode::ZR;
    zero_rated.vat_amount = Decimal::ZERO;
    zero_rated.net_amount = dec!(50);
    zero_rated.customer_id = 0;

    let csv = convert_faf_to_csv(&[zero_rated]);

    assert!(csv.ends_with("LC-1,2024-02-29,loyalty_card,0,50.00,50.00,0.00,ZR,AED,\"Loyalty card - 5 sessions\""));
}

proptest! {
    #[test]
    fn test_one_line_per_record(count in 0usize..50) {
        let records: Vec<FafRecord> = (0..count)
            .map(|i| record(&format!("BK-{}", i), FafTransactionType::Booking, "Spa booking"))
            .collect();

        let csv = convert_faf_to_csv(&records);

        prop_assert_eq!(csv.split('\n').count(), count + 1);
        prop_assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_description_field_round_trips(description in "[a-zA-Z0-9 ,\"]{0,40}") {
        let csv = convert_faf_to_csv(&[record("BK-1", FafTransactionType::Booking, &description)]);
        let row = csv.split('\n').nth(1).unwrap();

        // nine unquoted fields precede the description
        let mut quoted = row.splitn(10, ',').nth(9).unwrap().to_string();
        prop_assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        quoted = quoted[1..quoted.len() - 1].replace("\"\"", "\"");
        prop_assert_eq!(quoted, description);
    }
}
