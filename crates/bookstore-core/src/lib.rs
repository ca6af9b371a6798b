//! bookstore-core: Core types and path builders for the bookstore
//! publishing service.
//!
//! This crate provides:
//! - Pure storage-path builders mapping (bucket, prefix, relative path)
//!   to an object key, a canonical `s3://` URI, and a display path
//! - The publish model: a tagged `{type, content}` structure with
//!   explicit validation
//!
//! Everything here is pure and synchronous; the network-facing pieces
//! live in `bookstore-store` and `bookstore-server`.

pub mod model;
pub mod paths;

pub use model::{ModelError, PublishModel, NOTEBOOK_TYPE};
pub use paths::{display_path, object_key, storage_uri};
