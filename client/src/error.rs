//! Error types for the todo API client.
//!
//! # Design
//! Every failure propagates to the caller unrecovered — no retry, no
//! fallback, no default value. 404 is not special-cased: a delete of a
//! missing todo surfaces as `Http { status: 404 }` like any other
//! non-success status.

use std::fmt;

/// Errors returned by `TodoClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never reached the server, or the response body could not
    /// be read off the wire.
    Network(String),

    /// The server responded with a non-success status.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Parse(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Parse(msg) => write!(f, "parse failed: {msg}"),
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
