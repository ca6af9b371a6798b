//! bookstore-store: Object-storage layer for the bookstore publishing
//! service.
//!
//! This crate provides:
//! - The [`ObjectStore`] trait, the seam the HTTP layer writes through
//! - [`S3Store`], the S3 (and S3-compatible) implementation
//! - [`StoreError`] for upstream failures
//!
//! The trait is deliberately narrow: publishing needs exactly one
//! authenticated write per request, so the surface is a single
//! `put_object`. Handler tests swap in a mock implementation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookstore_store::{ObjectStore, S3Store, StorageSettings};
//!
//! let store = S3Store::new(settings);
//! let outcome = store.put_object("bucket", "published/nb.ipynb", bytes).await?;
//! if let Some(version) = outcome.version_id {
//!     // versioned bucket
//! }
//! ```

pub mod error;
pub mod s3;

pub use error::{StoreError, StoreResult};
pub use s3::{S3Store, StorageSettings};

use async_trait::async_trait;

/// Outcome of a single object write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutOutcome {
    /// Version identifier reported by the backend. Present only when the
    /// target bucket has versioning enabled.
    pub version_id: Option<String>,
}

/// An authenticated object-storage write capability.
///
/// Implementations perform exactly one write per call, with no retry and
/// no cleanup on failure: the PUT is atomic at the backend, so a failed
/// call leaves nothing behind.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` to `key` within `bucket`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> StoreResult<PutOutcome>;
}
