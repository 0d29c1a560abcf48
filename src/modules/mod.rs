pub mod faf;
pub mod health;
pub mod reports;
pub mod test_data;
pub mod vat;
