use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::faf::models::{FafFilters, FafRecord, FafTransactionType};

/// Revenue streams shown on the VAT report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStream {
    Services,
    Products,
    Loyalty,
}

impl ReportStream {
    pub const ALL: [ReportStream; 3] = [
        ReportStream::Services,
        ReportStream::Products,
        ReportStream::Loyalty,
    ];

    /// Stream a FAF line is reported under; invoices and payments restate
    /// booking revenue and are left out
    pub fn for_transaction_type(kind: FafTransactionType) -> Option<Self> {
        match kind {
            FafTransactionType::Booking => Some(ReportStream::Services),
            FafTransactionType::ProductSale => Some(ReportStream::Products),
            FafTransactionType::LoyaltyCard => Some(ReportStream::Loyalty),
            FafTransactionType::Invoice | FafTransactionType::Transaction => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStream::Services => "Services",
            ReportStream::Products => "Products",
            ReportStream::Loyalty => "Loyalty",
        }
    }
}

/// Count and amount totals for a group of FAF lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatTotals {
    pub count: u64,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub gross_amount: Decimal,
}

impl VatTotals {
    pub fn add(&mut self, record: &FafRecord) {
        self.count += 1;
        self.net_amount += record.net_amount;
        self.vat_amount += record.vat_amount;
        self.gross_amount += record.gross_amount;
    }

    pub fn merge(&mut self, other: &VatTotals) {
        self.count += other.count;
        self.net_amount += other.net_amount;
        self.vat_amount += other.vat_amount;
        self.gross_amount += other.gross_amount;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSummary {
    pub stream: ReportStream,
    pub label: String,
    #[serde(flatten)]
    pub totals: VatTotals,
}

/// Revenue-stream breakdown for the admin VAT screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatReport {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub spa_id: Option<i64>,
    /// Always one entry per stream, in [`ReportStream::ALL`] order
    pub streams: Vec<StreamSummary>,
    pub total: VatTotals,
}

impl VatReport {
    pub fn from_records(filters: &FafFilters, records: &[FafRecord]) -> Self {
        let mut per_stream = [VatTotals::default(); 3];

        for record in records {
            if let Some(stream) = ReportStream::for_transaction_type(record.transaction_type) {
                per_stream[stream as usize].add(record);
            }
        }

        let mut total = VatTotals::default();
        let streams = ReportStream::ALL
            .iter()
            .zip(per_stream.iter())
            .map(|(stream, totals)| {
                total.merge(totals);
                StreamSummary {
                    stream: *stream,
                    label: stream.label().to_string(),
                    totals: *totals,
                }
            })
            .collect();

        Self {
            start_date: filters.start_date,
            end_date: filters.end_date,
            spa_id: filters.spa_id,
            streams,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.count == 0
    }

    pub fn stream(&self, stream: ReportStream) -> Option<&StreamSummary> {
        self.streams.iter().find(|s| s.stream == stream)
    }
}
