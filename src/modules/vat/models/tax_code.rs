use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// FTA tax codes
///
/// Every code has a fixed rate; only the standard rate carries VAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxCode {
    /// Standard rate, 5%
    #[default]
    SR,
    /// Zero-rated supply
    ZR,
    /// Exempt supply
    ES,
    /// Out of scope of UAE VAT
    OP,
}

/// Catalogue of every code with its display name, in FTA order
pub const TAX_CODES: [(TaxCode, &str); 4] = [
    (TaxCode::SR, "Standard Rate"),
    (TaxCode::ZR, "Zero-Rated"),
    (TaxCode::ES, "Exempt"),
    (TaxCode::OP, "Out of Scope"),
];

impl TaxCode {
    pub const ALL: [TaxCode; 4] = [TaxCode::SR, TaxCode::ZR, TaxCode::ES, TaxCode::OP];

    /// VAT rate as a fraction (0.05 for the standard rate)
    pub fn rate(&self) -> Decimal {
        match self {
            TaxCode::SR => Decimal::new(5, 2),
            TaxCode::ZR | TaxCode::ES | TaxCode::OP => Decimal::ZERO,
        }
    }

    pub fn description(&self) -> &'static str {
        TAX_CODES
            .iter()
            .find(|(code, _)| code == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxCode::SR => "SR",
            TaxCode::ZR => "ZR",
            TaxCode::ES => "ES",
            TaxCode::OP => "OP",
        }
    }

    pub fn is_taxable(&self) -> bool {
        !self.rate().is_zero()
    }
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaxCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SR" => Ok(TaxCode::SR),
            "ZR" => Ok(TaxCode::ZR),
            "ES" => Ok(TaxCode::ES),
            "OP" => Ok(TaxCode::OP),
            _ => Err(format!(
                "Invalid tax code: {}. Must be one of SR, ZR, ES, OP",
                s
            )),
        }
    }
}
