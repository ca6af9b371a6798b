//! Version and feature-detection endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::config::ValidationReport;
use crate::extract::AuthenticatedUser;
use crate::state::AppState;

/// Version string reported to clients.
pub const BOOKSTORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capability report returned by GET /api/bookstore.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    /// Always true; lets clients detect the bookstore by shape alone.
    pub bookstore: bool,
    /// Semver of this server.
    pub version: &'static str,
    /// Startup validation flags, passed through unchanged.
    pub validation: ValidationReport,
}

/// GET /api/bookstore - feature detection for clients.
///
/// Pure read of startup state: identical settings produce identical
/// responses.
async fn get_version(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Json<VersionResponse> {
    Json(VersionResponse {
        bookstore: true,
        version: BOOKSTORE_VERSION,
        validation: state.validation().clone(),
    })
}

/// Build version routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/bookstore", get(get_version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_shape_is_stable() {
        let make = || VersionResponse {
            bookstore: true,
            version: BOOKSTORE_VERSION,
            validation: ValidationReport {
                bookstore_valid: true,
                publish_valid: true,
            },
        };
        let first = serde_json::to_string(&make()).unwrap();
        let second = serde_json::to_string(&make()).unwrap();
        assert_eq!(first, second);
        assert!(first.contains(r#""bookstore":true"#));
        assert!(first.contains(r#""validation""#));
    }

    #[test]
    fn version_is_semver_shaped() {
        assert_eq!(BOOKSTORE_VERSION.split('.').count(), 3);
    }
}
