//! HTTP requests and responses as plain data.
//!
//! # Design
//! The client describes every operation as an `HttpRequest` value and
//! interprets the backend's answer as an `HttpResponse` value. The `build_*`
//! and `parse_*` halves of each operation never touch the network, which
//! keeps them deterministic and easy to test; the transport module executes
//! the round-trip in between. All fields use owned types so values can be
//! stored, logged, or replayed freely.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and executed by the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport after executing an `HttpRequest`, then passed
/// to `TodoClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
