mod tax_code;
mod vat_calculation;

pub use tax_code::{TaxCode, TAX_CODES};
pub use vat_calculation::VatCalculation;
