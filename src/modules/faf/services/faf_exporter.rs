use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::faf::models::{FafFilters, FafRecord};
use crate::modules::faf::repositories::FafRepository;

/// Builds the FTA Audit File from every revenue stream
///
/// The five stream queries run concurrently. The first failure aborts the
/// export; a partial file is never returned.
pub struct FafExporter {
    repository: Arc<dyn FafRepository>,
    query_timeout: Option<Duration>,
}

impl FafExporter {
    pub fn new(repository: Arc<dyn FafRepository>) -> Self {
        Self {
            repository,
            query_timeout: None,
        }
    }

    /// Bound the combined stream queries; `None` waits indefinitely
    pub fn with_query_timeout(mut self, query_timeout: Option<Duration>) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Collect FAF records matching `filters`, newest first
    pub async fn generate_faf_export(&self, filters: &FafFilters) -> Result<Vec<FafRecord>> {
        filters.validate()?;

        info!(
            "Generating FAF export: start={:?}, end={:?}, spa={:?}",
            filters.start_date, filters.end_date, filters.spa_id
        );

        let fetch = async {
            tokio::try_join!(
                self.repository.fetch_bookings(filters),
                self.repository.fetch_product_sales(filters),
                self.repository.fetch_loyalty_cards(filters),
                self.repository.fetch_invoices(filters),
                self.repository.fetch_transactions(filters),
            )
        };

        let (bookings, product_sales, loyalty_cards, invoices, transactions) =
            match self.query_timeout {
                Some(limit) => tokio::time::timeout(limit, fetch).await.map_err(|_| {
                    warn!("FAF export exceeded {:?}", limit);
                    AppError::timeout(format!("FAF export exceeded {} seconds", limit.as_secs()))
                })??,
                None => fetch.await?,
            };

        debug!(
            bookings = bookings.len(),
            product_sales = product_sales.len(),
            loyalty_cards = loyalty_cards.len(),
            invoices = invoices.len(),
            transactions = transactions.len(),
            "Fetched FAF source rows"
        );

        let mut records = Vec::with_capacity(
            bookings.len()
                + product_sales.len()
                + loyalty_cards.len()
                + invoices.len()
                + transactions.len(),
        );
        for row in bookings {
            records.push(row.into_faf_record()?);
        }
        for row in product_sales {
            records.push(row.into_faf_record()?);
        }
        for row in loyalty_cards {
            records.push(row.into_faf_record()?);
        }
        for row in invoices {
            records.push(row.into_faf_record()?);
        }
        for row in transactions {
            records.push(row.into_faf_record()?);
        }

        // Stable, so same-day records keep stream order
        records.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));

        info!("FAF export generated with {} records", records.len());

        Ok(records)
    }
}
