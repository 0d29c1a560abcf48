mod vat_calculator;

pub use vat_calculator::{calculate_vat, calculate_vat_from_net, calculate_vat_with_discount};
