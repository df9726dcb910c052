//! # Query Errors

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while turning query parameters into filters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `id` filter value is not an integer
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Parameter not in `key=value` form
    #[error("Invalid query parameter: {0}")]
    InvalidParam(String),
}
