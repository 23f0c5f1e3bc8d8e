//! API request/response types

pub mod error;
pub mod query;

use serde::Serialize;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use query::Query;

/// List envelope used by the collection endpoints
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse<T> {
    pub results: Vec<T>,
}

impl<T> ResultsResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }
}
