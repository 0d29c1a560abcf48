//! Per-stream SELECT statements for the FAF export.
//!
//! Each revenue-stream table reaches its spa through a different path. The
//! tenant join is only added when a spa filter is present, and it is always an
//! INNER JOIN so rows with no path to the spa drop out.

use sqlx::{MySql, QueryBuilder};

use crate::modules::faf::models::{FafFilters, FafTransactionType};

/// Base statement plus the fragments needed to scope one stream
#[derive(Debug, Clone, Copy)]
pub struct StreamQuery {
    pub stream: FafTransactionType,
    select: &'static str,
    date_column: &'static str,
    tenant_join: Option<&'static str>,
    tenant_column: &'static str,
}

pub const BOOKINGS: StreamQuery = StreamQuery {
    stream: FafTransactionType::Booking,
    select: "SELECT b.id, b.customer_id, b.booking_date, b.total_amount, sv.name AS service_name \
             FROM bookings b LEFT JOIN services sv ON b.service_id = sv.id",
    date_column: "b.booking_date",
    tenant_join: None,
    tenant_column: "b.spa_id",
};

pub const PRODUCT_SALES: StreamQuery = StreamQuery {
    stream: FafTransactionType::ProductSale,
    select: "SELECT ps.id, ps.customer_id, ps.sale_date, ps.product_name, ps.quantity, \
             ps.total_price, ps.net_amount, ps.vat_amount, ps.tax_code \
             FROM product_sales ps",
    date_column: "ps.sale_date",
    tenant_join: Some("INNER JOIN staff st ON ps.sold_by = st.id"),
    tenant_column: "st.spa_id",
};

pub const LOYALTY_CARDS: StreamQuery = StreamQuery {
    stream: FafTransactionType::LoyaltyCard,
    select: "SELECT lc.id, lc.customer_id, lc.purchase_date, lc.sessions_included, \
             lc.purchase_price, lc.net_amount, lc.vat_amount, lc.tax_code \
             FROM loyalty_cards lc",
    date_column: "lc.purchase_date",
    tenant_join: Some("INNER JOIN services sv ON lc.service_id = sv.id"),
    tenant_column: "sv.spa_id",
};

pub const INVOICES: StreamQuery = StreamQuery {
    stream: FafTransactionType::Invoice,
    select: "SELECT i.id, i.customer_id, i.invoice_number, i.invoice_date, i.total_amount \
             FROM invoices i",
    date_column: "i.invoice_date",
    tenant_join: Some("INNER JOIN bookings b ON i.booking_id = b.id"),
    tenant_column: "b.spa_id",
};

pub const TRANSACTIONS: StreamQuery = StreamQuery {
    stream: FafTransactionType::Transaction,
    select: "SELECT t.id, t.invoice_id, t.transaction_date, t.amount, t.payment_method \
             FROM transactions t",
    date_column: "t.transaction_date",
    tenant_join: Some(
        "INNER JOIN invoices i ON t.invoice_id = i.id \
         INNER JOIN bookings b ON i.booking_id = b.id",
    ),
    tenant_column: "b.spa_id",
};

pub const ALL_STREAMS: [StreamQuery; 5] =
    [BOOKINGS, PRODUCT_SALES, LOYALTY_CARDS, INVOICES, TRANSACTIONS];

impl StreamQuery {
    /// Render the statement with the filter predicates bound as parameters
    pub fn build(&self, filters: &FafFilters) -> QueryBuilder<'static, MySql> {
        let mut builder = QueryBuilder::new(self.select);

        if filters.spa_id.is_some() {
            if let Some(join) = self.tenant_join {
                builder.push(" ").push(join);
            }
        }

        let mut keyword = " WHERE ";
        if let Some(start) = filters.start_date {
            builder
                .push(keyword)
                .push(self.date_column)
                .push(" >= ")
                .push_bind(start);
            keyword = " AND ";
        }
        if let Some(end) = filters.end_date {
            builder
                .push(keyword)
                .push(self.date_column)
                .push(" <= ")
                .push_bind(end);
            keyword = " AND ";
        }
        if let Some(spa_id) = filters.spa_id {
            builder
                .push(keyword)
                .push(self.tenant_column)
                .push(" = ")
                .push_bind(spa_id);
        }

        builder.push(" ORDER BY ").push(self.date_column).push(" DESC");
        builder
    }
}
