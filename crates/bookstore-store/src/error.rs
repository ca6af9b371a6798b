//! Error types for the object-storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during object-storage operations.
///
/// These are upstream failures (network, permission, missing bucket);
/// the HTTP layer reports them as a 5xx, never as a caller error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend rejected or failed the write.
    #[error("object storage write failed: {0}")]
    PutObject(String),

    /// The configured settings cannot produce a usable client.
    #[error("invalid storage configuration: {0}")]
    Config(String),
}
