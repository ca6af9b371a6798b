//! S3 implementation of the object-storage seam.

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{StoreError, StoreResult};
use crate::{ObjectStore, PutOutcome};

/// Connection settings for the S3 backend.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Access key id for the bucket credentials.
    pub access_key_id: String,
    /// Secret access key for the bucket credentials.
    pub secret_access_key: String,
    /// Custom endpoint URL for S3-compatible stores (MinIO, etc.).
    /// `None` targets AWS proper.
    pub endpoint_url: Option<String>,
    /// Region name, e.g. `us-east-1`.
    pub region: String,
}

/// Object store backed by an S3 (or S3-compatible) service.
///
/// Holds only the immutable settings; a fresh SDK client is constructed
/// for every write so credential state never outlives the request that
/// needed it.
#[derive(Debug, Clone)]
pub struct S3Store {
    settings: StorageSettings,
}

impl S3Store {
    /// Create a store over the given connection settings.
    pub fn new(settings: StorageSettings) -> Self {
        Self { settings }
    }

    /// Build a request-scoped client from the configured settings.
    fn client(&self) -> aws_sdk_s3::Client {
        let credentials = Credentials::new(
            self.settings.access_key_id.clone(),
            self.settings.secret_access_key.clone(),
            None,
            None,
            "bookstore-settings",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.settings.region.clone()))
            .credentials_provider(credentials);

        if let Some(endpoint) = &self.settings.endpoint_url {
            // S3-compatible stores behind a custom endpoint expect
            // path-style addressing.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        aws_sdk_s3::Client::from_conf(builder.build())
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> StoreResult<PutOutcome> {
        let client = self.client();

        tracing::debug!(bucket, key, bytes = body.len(), "issuing object-storage write");

        let output = client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::PutObject(format!("{}", DisplayErrorContext(e))))?;

        Ok(PutOutcome {
            version_id: output.version_id().map(str::to_string),
        })
    }
}
