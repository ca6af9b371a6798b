//! The publish model: the request body accepted by the publish endpoint.
//!
//! The wire shape matches the notebook contents API for PUT:
//! `{"type": "notebook", "content": {...}}`. Rather than reaching into a
//! loosely-typed map, the body is deserialized into [`PublishModel`] and
//! validated up front; anything that does not match the shape is rejected
//! with a [`ModelError`] before any storage work happens.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// The only document type the bookstore publishes.
pub const NOTEBOOK_TYPE: &str = "notebook";

/// Validation errors for an incoming publish body.
///
/// Each variant maps to a 400 response; the `Display` text is the
/// message callers see.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Body was absent, `null`, or an empty object.
    #[error("empty model")]
    Empty,

    /// Body was not valid JSON or did not match `{type, content}`.
    #[error("malformed model: {0}")]
    Malformed(String),

    /// Body declared a type other than `notebook`.
    #[error("unsupported document type: {0}")]
    UnsupportedType(String),
}

/// A validated publish request body.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishModel {
    /// Document type declared by the caller. Always `notebook` after
    /// validation.
    #[serde(rename = "type")]
    pub model_type: String,
    /// The document payload to persist, kept as arbitrary JSON.
    pub content: Value,
}

impl PublishModel {
    /// Validate a decoded JSON body into a `PublishModel`.
    ///
    /// Checks run in order: emptiness, shape, then document type.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match &value {
            Value::Null => return Err(ModelError::Empty),
            Value::Object(map) if map.is_empty() => return Err(ModelError::Empty),
            _ => {}
        }

        let model: PublishModel =
            serde_json::from_value(value).map_err(|e| ModelError::Malformed(e.to_string()))?;

        if model.model_type != NOTEBOOK_TYPE {
            return Err(ModelError::UnsupportedType(model.model_type));
        }

        Ok(model)
    }

    /// Serialize the content payload for the storage write.
    pub fn content_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.content)
    }
}
