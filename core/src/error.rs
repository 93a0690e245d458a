//! Error type for the places client.
//!
//! # Design
//! A non-2xx response surfaces as a bare `RequestFailed`. The status is
//! logged where the failure is detected and is not carried in the error.

/// Errors returned by `PlacesClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status outside 200..=299.
    #[error("Failed to fetch")]
    RequestFailed,

    /// The response body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    DecodeFailed(String),

    /// The request never produced a response (DNS, connect, read errors).
    #[error("transport error: {0}")]
    Transport(String),

    /// The configured base URL could not be turned into a request URL.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}
