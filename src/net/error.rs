//! Failure cases for the fetch wrapper.
//!
//! Auth and quota short-circuits are NOT errors; they surface as
//! `ApiOutcome` variants. These variants cover everything the wrapper does
//! not handle itself and hands back to the caller.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("invalid request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
