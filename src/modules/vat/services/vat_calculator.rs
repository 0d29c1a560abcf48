//! UAE VAT arithmetic under the inclusive-pricing convention.
//!
//! Amounts are rounded half-up to 2 decimal places. Negative amounts are
//! rejected rather than split into a negative net/VAT pair.

use rust_decimal::Decimal;

use crate::core::{AppError, Currency, Result};
use crate::modules::vat::models::{TaxCode, VatCalculation};

/// Split a VAT-inclusive (gross) amount into net and VAT
pub fn calculate_vat(inclusive_amount: Decimal, tax_code: TaxCode) -> Result<VatCalculation> {
    validate_amount("Amount", inclusive_amount)?;

    let total = round2(inclusive_amount);
    if !tax_code.is_taxable() {
        return Ok(VatCalculation::untaxed(total));
    }

    let net = inclusive_amount
        .checked_div(Decimal::ONE + tax_code.rate())
        .ok_or_else(amount_too_large)?;
    let vat = inclusive_amount
        .checked_sub(net)
        .ok_or_else(amount_too_large)?;

    Ok(VatCalculation::new(round2(net), round2(vat), total))
}

/// Add VAT on top of a VAT-exclusive (net) amount
pub fn calculate_vat_from_net(exclusive_amount: Decimal, tax_code: TaxCode) -> Result<VatCalculation> {
    validate_amount("Amount", exclusive_amount)?;

    if !tax_code.is_taxable() {
        return Ok(VatCalculation::untaxed(round2(exclusive_amount)));
    }

    let vat = exclusive_amount
        .checked_mul(tax_code.rate())
        .ok_or_else(amount_too_large)?;
    let total = exclusive_amount
        .checked_add(vat)
        .ok_or_else(amount_too_large)?;

    Ok(VatCalculation::new(
        round2(exclusive_amount),
        round2(vat),
        round2(total),
    ))
}

/// Apply a discount to the gross price, then split the discounted gross.
///
/// The discount always comes off the VAT-inclusive figure, never the net.
pub fn calculate_vat_with_discount(
    gross_amount: Decimal,
    discount_amount: Decimal,
    tax_code: TaxCode,
) -> Result<VatCalculation> {
    validate_amount("Gross amount", gross_amount)?;
    validate_amount("Discount", discount_amount)?;

    if discount_amount > gross_amount {
        return Err(AppError::validation(format!(
            "Discount {} exceeds gross amount {}",
            discount_amount, gross_amount
        )));
    }

    calculate_vat(gross_amount - discount_amount, tax_code)
}

fn round2(amount: Decimal) -> Decimal {
    let mut rounded = Currency::AED.round(amount);
    rounded.rescale(Currency::AED.scale());
    rounded
}

fn validate_amount(field: &str, amount: Decimal) -> Result<()> {
    Currency::AED
        .validate_amount(amount)
        .map_err(|e| AppError::validation(format!("{}: {} ({})", field, e, amount)))
}

fn amount_too_large() -> AppError {
    AppError::validation("Amount too large")
}
