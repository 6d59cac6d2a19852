//! Error types for the engine and its collaborators

use thiserror::Error;

/// Rejected engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in ({min}, {max}), got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} sampling step {value} rad is coarser than {max} rad")]
    StepTooCoarse {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("at least one ring is required")]
    NoRings,

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Record store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("store rejected the write: {0}")]
    Rejected(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Media upload flow failures
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("file is empty")]
    Empty,

    #[error("file is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("signing broker failed: {0}")]
    Broker(String),

    #[error("signed URL expired before upload")]
    Expired,

    #[error("object upload failed: {0}")]
    Transport(String),

    #[error("record store failed: {0}")]
    Store(#[from] StoreError),
}
