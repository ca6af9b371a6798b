//! Notebook publishing endpoint.
//!
//! `PUT /api/bookstore/published/{*path}` writes a notebook's content to
//! the configured bucket under `{prefix}/{path}`. The payload matches
//! the notebook contents API for PUT: `{"type": "notebook", "content": ...}`.
//!
//! Each request is strictly sequential — validate, compute the key,
//! one storage write, respond — and shares nothing with concurrent
//! publishes; the storage backend resolves races as last-write-wins.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::put,
};
use serde::Serialize;

use bookstore_core::{ModelError, PublishModel, display_path, object_key, storage_uri};

use crate::error::{ApiError, ApiResult};
use crate::extract::AuthenticatedUser;
use crate::state::AppState;

/// Response for a successful publish. Field names match the wire format
/// clients already consume.
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    /// Canonical storage URI of the published document.
    #[serde(rename = "s3path")]
    pub s3_path: String,
    /// Backend version identifier, omitted for unversioned buckets.
    #[serde(rename = "versionID", skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

/// PUT /api/bookstore/published/{*path} - publish a notebook.
///
/// # Response
///
/// - 201 Created: `{ "s3path": "...", "versionID": "..."? }`
/// - 400 Bad Request: empty path, empty model, or non-notebook type
/// - 403 Forbidden: missing or invalid token
/// - 502 Bad Gateway: storage backend failure (not retried)
async fn publish_notebook(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(path): Path<String>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<PublishResponse>)> {
    publish(&state, &path, &body).await
}

/// Validate the request, compute the key, and perform the single
/// storage write.
async fn publish(
    state: &AppState,
    path: &str,
    body: &[u8],
) -> ApiResult<(StatusCode, Json<PublishResponse>)> {
    tracing::info!(path, "attempting publish");

    let relative_path = path.trim_start_matches('/');
    if relative_path.is_empty() {
        return Err(ApiError::BadRequest("missing publish path".to_string()));
    }

    if body.is_empty() {
        return Err(ModelError::Empty.into());
    }
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("malformed model: {e}")))?;
    let model = PublishModel::from_value(value)?;

    let settings = state.settings();
    let key = object_key(&settings.published_prefix, relative_path);
    let uri = storage_uri(&settings.s3_bucket, &settings.published_prefix, relative_path);

    tracing::info!(
        target = %display_path(&settings.s3_bucket, &settings.published_prefix, relative_path),
        "publishing notebook"
    );

    let content = model
        .content_bytes()
        .map_err(|e| ApiError::Internal(format!("failed to serialize content: {e}")))?;

    let outcome = state
        .store()
        .put_object(&settings.s3_bucket, &key, content)
        .await?;

    tracing::info!(path = relative_path, "published write complete");

    Ok((
        StatusCode::CREATED,
        Json(PublishResponse {
            s3_path: uri,
            version_id: outcome.version_id,
        }),
    ))
}

/// Build publish routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/bookstore/published/{*path}", put(publish_notebook))
}
