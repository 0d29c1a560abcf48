pub mod currency;
pub mod dates;
pub mod error;

pub use currency::Currency;
pub use dates::parse_date;
pub use error::{AppError, Result};
