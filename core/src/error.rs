//! Error types for the Travis CI API client.
//!
//! # Design
//! Errors split on whether the server answered. `HttpError` and
//! `DeserializationError` carry the raw `HttpResponse` so callers can inspect
//! status and headers. The remaining variants happen before or instead of a
//! response and carry only a message. There is no dedicated "not found"
//! variant; a 404 is an `HttpError` like any other non-2xx status.

use thiserror::Error;

use crate::http::HttpResponse;

/// Errors returned by `Client` and the service methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The options value could not be encoded as a query string.
    #[error("query encoding failed: {0}")]
    QueryEncoding(String),

    /// The resource id cannot be used as a path segment.
    #[error("invalid resource id: {0:?}")]
    InvalidId(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The transport could not complete the round-trip.
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The server returned a non-2xx status.
    #[error("HTTP {}: {}", .response.status, .response.body)]
    HttpError { response: HttpResponse },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {message}")]
    DeserializationError {
        message: String,
        response: HttpResponse,
    },
}

impl ApiError {
    /// The raw response, when the server answered.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::HttpError { response } | ApiError::DeserializationError { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}
