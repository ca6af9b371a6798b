//! Route definitions for the HTTP API.

pub mod health;
pub mod publish;
pub mod version;

use axum::Router;

use crate::state::AppState;

/// Build the complete router.
///
/// The version endpoint is always mounted so clients can feature-detect.
/// The publish endpoint is mounted only when the startup validation
/// report shows publishing fully configured; otherwise requests to it
/// 404 at the routing layer.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(health::routes())
        .merge(version::routes());

    if state.validation().publish_ready() {
        router = router.merge(publish::routes());
    }

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BookstoreSettings;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bookstore_store::{ObjectStore, PutOutcome, StoreResult};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct NullStore;

    #[async_trait::async_trait]
    impl ObjectStore for NullStore {
        async fn put_object(
            &self,
            _bucket: &str,
            _key: &str,
            _body: Vec<u8>,
        ) -> StoreResult<PutOutcome> {
            Ok(PutOutcome::default())
        }
    }

    fn settings(bucket: &str, api_token: &str) -> BookstoreSettings {
        BookstoreSettings {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            api_token: api_token.to_string(),
            s3_bucket: bucket.to_string(),
            published_prefix: "published".to_string(),
            s3_access_key_id: "key".to_string(),
            s3_secret_access_key: "secret".to_string(),
            s3_endpoint_url: None,
            s3_region_name: "us-east-1".to_string(),
        }
    }

    fn router(bucket: &str, api_token: &str) -> Router {
        build_router(AppState::new(settings(bucket, api_token), Arc::new(NullStore)))
    }

    fn publish_request() -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/api/bookstore/published/notes/a.ipynb")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"type":"notebook","content":{"cells":[]}}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn version_endpoint_is_always_mounted() {
        let response = router("", "")
            .oneshot(
                Request::builder()
                    .uri("/api/bookstore")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn publish_mounted_when_validation_passes() {
        let response = router("notebooks", "").oneshot(publish_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn publish_not_mounted_without_bucket() {
        let response = router("", "").oneshot(publish_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn version_requires_token_when_configured() {
        let response = router("notebooks", "sekrit")
            .oneshot(
                Request::builder()
                    .uri("/api/bookstore")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let response = router("notebooks", "sekrit")
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
