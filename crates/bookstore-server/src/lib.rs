//! bookstore-server: HTTP API for publishing notebooks to object storage.
//!
//! This crate provides:
//! - `GET /api/bookstore` — version and feature detection
//! - `PUT /api/bookstore/published/{*path}` — publish a notebook's content
//!   to the configured bucket (mounted only when startup validation passes)
//! - `GET /health` — liveness probe
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for request
//! tracing, CORS, and request-id propagation. The object-storage backend
//! is injected into [`AppState`] as a trait object, so handlers never
//! touch the S3 SDK directly and tests can substitute a mock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookstore_server::{config::BookstoreSettings, routes, state::AppState};
//! use bookstore_store::S3Store;
//! use std::sync::Arc;
//!
//! let settings = BookstoreSettings::from_env()?;
//! let store = Arc::new(S3Store::new(settings.storage_settings()));
//! let app = routes::build_router(AppState::new(settings, store));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{BookstoreSettings, ConfigError, ValidationReport};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use bookstore_core;
pub use bookstore_store;
