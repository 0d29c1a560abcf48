mod test_data_repository;

pub use test_data_repository::{MySqlTestDataRepository, TestDataRepository};
