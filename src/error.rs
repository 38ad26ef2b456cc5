//! Error taxonomy shared by the stores, the aggregator and the REST facade

use thiserror::Error;

/// Result type for store, query and aggregation operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors surfaced by the core
///
/// Every variant is distinguishable by the REST facade, which maps them to
/// status codes in `api::rest`.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Malformed or out-of-range input, detected before anything is written
    #[error("validation failed: {0}")]
    Validation(String),

    /// Bad query parameter, e.g. a non-positive limit
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup or a singular aggregation matched nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing storage could not be read or written
    #[error("storage unavailable: {0}")]
    Transport(#[from] std::io::Error),

    /// Persisted data could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StatsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}
