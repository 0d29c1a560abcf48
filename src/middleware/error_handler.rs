use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    Error, HttpRequest,
};

use crate::core::AppError;

/// Body extractor errors reported in the crate's error format
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), "Rejected JSON body: {}", err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

/// Query-string extractor errors reported in the crate's error format
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    tracing::warn!(path = %req.path(), "Rejected query string: {}", err);
    AppError::validation(format!("Invalid query parameters: {}", err)).into()
}
