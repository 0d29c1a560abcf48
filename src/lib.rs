//! UAE VAT compliance for the spa platform.
//!
//! Splits amounts into net and VAT under the FTA tax codes, imports FTA
//! certification test transactions and exports the FTA Audit File (FAF).

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::faf;
pub use modules::reports;
pub use modules::test_data;
pub use modules::vat;
