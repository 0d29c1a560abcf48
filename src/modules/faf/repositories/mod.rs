mod faf_repository;
pub mod stream_query;

pub use faf_repository::{FafRepository, MySqlFafRepository};
pub use stream_query::StreamQuery;
