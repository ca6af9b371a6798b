//! Bookstore settings from environment variables, plus the startup
//! validation report.

use std::env;

use serde::Serialize;

/// All settings for the bookstore server, loaded once at startup.
#[derive(Debug, Clone)]
pub struct BookstoreSettings {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// Shared API token checked by the auth extractor. Empty disables
    /// enforcement (dev mode).
    pub api_token: String,
    /// Target bucket for published notebooks.
    pub s3_bucket: String,
    /// Key prefix under which published notebooks land.
    pub published_prefix: String,
    /// Access key id for the bucket.
    pub s3_access_key_id: String,
    /// Secret access key for the bucket.
    pub s3_secret_access_key: String,
    /// Custom endpoint URL for S3-compatible stores; None targets AWS.
    pub s3_endpoint_url: Option<String>,
    /// Region name.
    pub s3_region_name: String,
}

impl BookstoreSettings {
    /// Load settings from environment variables.
    ///
    /// Optional (with defaults):
    /// - `PORT`: server port (default: 3000)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `CORS_ALLOWED_ORIGINS`: allowed CORS origins (default: "*")
    /// - `BOOKSTORE_API_TOKEN`: shared auth token (default: "", auth off)
    /// - `BOOKSTORE_S3_BUCKET`: target bucket (default: "", publishing
    ///   stays disabled until set — see [`BookstoreSettings::validate`])
    /// - `BOOKSTORE_PUBLISHED_PREFIX`: key prefix (default: "published")
    /// - `BOOKSTORE_S3_ACCESS_KEY_ID` / `BOOKSTORE_S3_SECRET_ACCESS_KEY`
    /// - `BOOKSTORE_S3_ENDPOINT_URL`: custom endpoint (default: unset)
    /// - `BOOKSTORE_S3_REGION_NAME`: region (default: "us-east-1")
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 3000,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let api_token = env::var("BOOKSTORE_API_TOKEN").unwrap_or_default();

        let s3_bucket = env::var("BOOKSTORE_S3_BUCKET").unwrap_or_default();

        let published_prefix = env::var("BOOKSTORE_PUBLISHED_PREFIX")
            .unwrap_or_else(|_| "published".to_string());

        let s3_access_key_id = env::var("BOOKSTORE_S3_ACCESS_KEY_ID").unwrap_or_default();
        let s3_secret_access_key =
            env::var("BOOKSTORE_S3_SECRET_ACCESS_KEY").unwrap_or_default();

        let s3_endpoint_url = env::var("BOOKSTORE_S3_ENDPOINT_URL").ok();

        let s3_region_name = env::var("BOOKSTORE_S3_REGION_NAME")
            .unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            port,
            log_level,
            cors_allowed_origins,
            api_token,
            s3_bucket,
            published_prefix,
            s3_access_key_id,
            s3_secret_access_key,
            s3_endpoint_url,
            s3_region_name,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Compute the startup validation report.
    ///
    /// `bookstore_valid` requires a bucket; `publish_valid` requires a
    /// published prefix. Both must hold for the publish endpoint to be
    /// mounted.
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            bookstore_valid: !self.s3_bucket.trim().is_empty(),
            publish_valid: !self.published_prefix.trim().is_empty(),
        }
    }

    /// Extract the connection settings for the storage layer.
    pub fn storage_settings(&self) -> bookstore_store::StorageSettings {
        bookstore_store::StorageSettings {
            access_key_id: self.s3_access_key_id.clone(),
            secret_access_key: self.s3_secret_access_key.clone(),
            endpoint_url: self.s3_endpoint_url.clone(),
            region: self.s3_region_name.clone(),
        }
    }
}

/// Startup validation flags, reported verbatim by the version endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    /// General bookstore configuration is present.
    pub bookstore_valid: bool,
    /// Publishing configuration is present.
    pub publish_valid: bool,
}

impl ValidationReport {
    /// Whether the publish endpoint should be mounted.
    pub fn publish_ready(&self) -> bool {
        self.bookstore_valid && self.publish_valid
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_bucket(bucket: &str, prefix: &str) -> BookstoreSettings {
        BookstoreSettings {
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
            api_token: String::new(),
            s3_bucket: bucket.to_string(),
            published_prefix: prefix.to_string(),
            s3_access_key_id: "key".to_string(),
            s3_secret_access_key: "secret".to_string(),
            s3_endpoint_url: None,
            s3_region_name: "us-east-1".to_string(),
        }
    }

    #[test]
    fn validate_requires_bucket() {
        let report = settings_with_bucket("", "published").validate();
        assert!(!report.bookstore_valid);
        assert!(report.publish_valid);
        assert!(!report.publish_ready());
    }

    #[test]
    fn validate_requires_prefix() {
        let report = settings_with_bucket("notebooks", "  ").validate();
        assert!(report.bookstore_valid);
        assert!(!report.publish_valid);
        assert!(!report.publish_ready());
    }

    #[test]
    fn validate_passes_when_configured() {
        let report = settings_with_bucket("notebooks", "published").validate();
        assert!(report.publish_ready());
    }

    #[test]
    fn storage_settings_carry_credentials() {
        let storage = settings_with_bucket("notebooks", "published").storage_settings();
        assert_eq!(storage.access_key_id, "key");
        assert_eq!(storage.region, "us-east-1");
        assert!(storage.endpoint_url.is_none());
    }

    #[test]
    fn socket_addr_uses_port() {
        let settings = settings_with_bucket("notebooks", "published");
        assert_eq!(settings.socket_addr().port(), 3000);
    }

    #[test]
    fn validation_report_serializes_flags() {
        let report = ValidationReport {
            bookstore_valid: true,
            publish_valid: false,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"bookstore_valid":true,"publish_valid":false}"#);
    }
}
