//! Error types for the fetch boundary.

use thiserror::Error;

/// Errors surfaced by [`crate::api::CatalogApi`] implementations.
///
/// Everything a fetch can fail with is caught here; the rendering layer
/// never observes these, only `{ buffer, loading }`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the backend.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not parse into the expected envelope shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
