use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::AppError;
use crate::modules::vat::models::{TaxCode, VatCalculation, TAX_CODES};
use crate::modules::vat::services::{
    calculate_vat, calculate_vat_from_net, calculate_vat_with_discount,
};

/// Whether the submitted amount already contains VAT
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    #[default]
    Inclusive,
    Exclusive,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateVatRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub tax_code: TaxCode,
    #[serde(default)]
    pub mode: CalculationMode,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxCodeResponse {
    code: TaxCode,
    name: &'static str,
    rate: String,
}

impl CalculateVatRequest {
    pub fn calculate(&self) -> Result<VatCalculation, AppError> {
        match (self.mode, self.discount) {
            (CalculationMode::Inclusive, Some(discount)) => {
                calculate_vat_with_discount(self.amount, discount, self.tax_code)
            }
            (CalculationMode::Inclusive, None) => calculate_vat(self.amount, self.tax_code),
            (CalculationMode::Exclusive, Some(_)) => Err(AppError::validation(
                "Discounts apply to VAT-inclusive amounts only",
            )),
            (CalculationMode::Exclusive, None) => {
                calculate_vat_from_net(self.amount, self.tax_code)
            }
        }
    }
}

/// List the FTA tax codes and their rates
/// GET /tax-codes
pub async fn list_tax_codes() -> HttpResponse {
    let codes: Vec<TaxCodeResponse> = TAX_CODES
        .iter()
        .map(|(code, name)| TaxCodeResponse {
            code: *code,
            name,
            rate: code.rate().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({ "taxCodes": codes }))
}

/// Split an amount into net and VAT
/// POST /vat/calculate
pub async fn calculate(
    request: web::Json<CalculateVatRequest>,
) -> Result<HttpResponse, AppError> {
    let calculation = request.calculate()?;
    Ok(HttpResponse::Ok().json(calculation))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/tax-codes", web::get().to(list_tax_codes))
        .route("/vat/calculate", web::post().to(calculate));
}
