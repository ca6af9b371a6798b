//! Deterministic storage-path construction.
//!
//! A published document is addressed three ways:
//!
//! - the **object key** (`{prefix}/{relative_path}`) used against the
//!   storage API,
//! - the canonical **storage URI** (`s3://{bucket}/{key}`) returned to
//!   callers,
//! - a **display path** (`{bucket}/{key}`) for log lines.
//!
//! All three are pure functions of their inputs and agree on the key
//! portion: segments are trimmed of surrounding separators and joined
//! with exactly one `/`, so callers may pass prefixes with or without a
//! trailing slash and paths with or without a leading one.
//!
//! Callers are responsible for rejecting empty relative paths before
//! building a key; these functions do not validate.

/// Trim surrounding separators from each segment and join the non-empty
/// ones with a single `/`.
fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    segments
        .into_iter()
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the object key under which a document is stored within a bucket.
#[must_use]
pub fn object_key(prefix: &str, relative_path: &str) -> String {
    join_segments([prefix, relative_path])
}

/// Build the canonical scheme-qualified storage URI for a published
/// document. This is the `s3path` value returned to callers.
#[must_use]
pub fn storage_uri(bucket: &str, prefix: &str, relative_path: &str) -> String {
    format!("s3://{}", display_path(bucket, prefix, relative_path))
}

/// Build a human-readable `{bucket}/{key}` path for log output.
///
/// Not guaranteed to be parseable back into its parts; use
/// [`storage_uri`] for anything a machine consumes.
#[must_use]
pub fn display_path(bucket: &str, prefix: &str, relative_path: &str) -> String {
    join_segments([bucket, prefix, relative_path])
}
