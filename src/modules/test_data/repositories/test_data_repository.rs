use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::test_data::models::{NewLoyaltyCard, NewProductSale, NewTransaction};

/// Write side of the test-data import
///
/// Every insert commits on its own; a batch is never wrapped in one transaction.
#[async_trait]
pub trait TestDataRepository: Send + Sync {
    /// Insert a product sale, returning its id
    async fn insert_product_sale(&self, sale: &NewProductSale) -> Result<u64>;

    /// Insert a loyalty card, returning its id
    async fn insert_loyalty_card(&self, card: &NewLoyaltyCard) -> Result<u64>;

    /// Insert a payment transaction, returning its id
    async fn insert_transaction(&self, transaction: &NewTransaction) -> Result<u64>;
}

pub struct MySqlTestDataRepository {
    pool: MySqlPool,
}

impl MySqlTestDataRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestDataRepository for MySqlTestDataRepository {
    async fn insert_product_sale(&self, sale: &NewProductSale) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO product_sales (
                product_name, customer_id, quantity, unit_price, total_price,
                net_amount, vat_amount, tax_code, sold_by, sale_date, notes
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&sale.product_name)
        .bind(sale.customer_id)
        .bind(sale.quantity)
        .bind(sale.unit_price)
        .bind(sale.total_price)
        .bind(sale.net_amount)
        .bind(sale.vat_amount)
        .bind(sale.tax_code.as_str())
        .bind(sale.sold_by)
        .bind(sale.sale_date)
        .bind(&sale.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create product sale: {}", e)))?;

        Ok(result.last_insert_id())
    }

    async fn insert_loyalty_card(&self, card: &NewLoyaltyCard) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO loyalty_cards (
                customer_id, service_id, sessions_included, purchase_price,
                net_amount, vat_amount, tax_code, purchase_date
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(card.customer_id)
        .bind(card.service_id)
        .bind(card.sessions_included)
        .bind(card.purchase_price)
        .bind(card.net_amount)
        .bind(card.vat_amount)
        .bind(card.tax_code.as_str())
        .bind(card.purchase_date)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create loyalty card: {}", e)))?;

        Ok(result.last_insert_id())
    }

    async fn insert_transaction(&self, transaction: &NewTransaction) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO transactions (
                invoice_id, amount, payment_method, status, reference, transaction_date
            )
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(transaction.invoice_id)
        .bind(transaction.amount)
        .bind(&transaction.payment_method)
        .bind(&transaction.status)
        .bind(&transaction.reference)
        .bind(transaction.transaction_date)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create transaction: {}", e)))?;

        Ok(result.last_insert_id())
    }
}
