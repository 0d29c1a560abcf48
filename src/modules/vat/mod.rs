pub mod controllers;
pub mod models;
pub mod services;

pub use models::{TaxCode, VatCalculation};
pub use services::{calculate_vat, calculate_vat_from_net, calculate_vat_with_discount};
