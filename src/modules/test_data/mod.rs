pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TestDataImportResult, TestDataTransaction};
pub use repositories::{MySqlTestDataRepository, TestDataRepository};
pub use services::{generate_sample_test_data, TestDataImporter};
