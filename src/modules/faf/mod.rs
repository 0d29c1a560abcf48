pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{FafFilters, FafRecord, FafTransactionType};
pub use repositories::{FafRepository, MySqlFafRepository};
pub use services::{convert_faf_to_csv, FafExporter};
