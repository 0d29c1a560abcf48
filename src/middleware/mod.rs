pub mod auth;
pub mod error_handler;
pub mod request_id;

pub use auth::{hash_admin_key, verify_admin_key, AdminAuth, ADMIN_KEY_HEADER};
pub use error_handler::{json_error_handler, query_error_handler};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
