use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::faf::models::{
    BookingRow, FafFilters, InvoiceRow, LoyaltyCardRow, ProductSaleRow, TransactionRow,
};
use crate::modules::faf::repositories::stream_query::{
    BOOKINGS, INVOICES, LOYALTY_CARDS, PRODUCT_SALES, TRANSACTIONS,
};

/// Read side of the FAF export, one query per revenue stream
///
/// Every method applies the same filters and returns rows newest first.
#[async_trait]
pub trait FafRepository: Send + Sync {
    async fn fetch_bookings(&self, filters: &FafFilters) -> Result<Vec<BookingRow>>;

    async fn fetch_product_sales(&self, filters: &FafFilters) -> Result<Vec<ProductSaleRow>>;

    async fn fetch_loyalty_cards(&self, filters: &FafFilters) -> Result<Vec<LoyaltyCardRow>>;

    async fn fetch_invoices(&self, filters: &FafFilters) -> Result<Vec<InvoiceRow>>;

    async fn fetch_transactions(&self, filters: &FafFilters) -> Result<Vec<TransactionRow>>;
}

pub struct MySqlFafRepository {
    pool: MySqlPool,
}

impl MySqlFafRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FafRepository for MySqlFafRepository {
    async fn fetch_bookings(&self, filters: &FafFilters) -> Result<Vec<BookingRow>> {
        let mut query = BOOKINGS.build(filters);
        let rows = query
            .build_query_as::<BookingRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_product_sales(&self, filters: &FafFilters) -> Result<Vec<ProductSaleRow>> {
        let mut query = PRODUCT_SALES.build(filters);
        let rows = query
            .build_query_as::<ProductSaleRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_loyalty_cards(&self, filters: &FafFilters) -> Result<Vec<LoyaltyCardRow>> {
        let mut query = LOYALTY_CARDS.build(filters);
        let rows = query
            .build_query_as::<LoyaltyCardRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_invoices(&self, filters: &FafFilters) -> Result<Vec<InvoiceRow>> {
        let mut query = INVOICES.build(filters);
        let rows = query
            .build_query_as::<InvoiceRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_transactions(&self, filters: &FafFilters) -> Result<Vec<TransactionRow>> {
        let mut query = TRANSACTIONS.build(filters);
        let rows = query
            .build_query_as::<TransactionRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
