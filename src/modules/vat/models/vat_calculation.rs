use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net/VAT/gross split of a single amount, each rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatCalculation {
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub total: Decimal,
}

impl VatCalculation {
    pub fn new(net_amount: Decimal, vat_amount: Decimal, total: Decimal) -> Self {
        Self {
            net_amount,
            vat_amount,
            total,
        }
    }

    /// Split with no VAT component
    pub fn untaxed(amount: Decimal) -> Self {
        Self::new(amount, Decimal::new(0, 2), amount)
    }

    /// Difference between `net + vat` and `total`, at most 0.01 after rounding
    pub fn rounding_drift(&self) -> Decimal {
        (self.net_amount + self.vat_amount - self.total).abs()
    }
}
