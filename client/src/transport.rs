//! Executes `HttpRequest` values over the wire with ureq.
//!
//! # Design
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data for the parse layer to interpret rather than
//! as transport errors. Only failures that prevent a response from being
//! read at all (connection refused, DNS, timeout) surface as
//! `ApiError::Network`.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub(crate) struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub(crate) fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Execute a request and return the raw response, whatever its status.
    pub(crate) fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?req.method, path = %req.path, "issuing request");

        let result = match (&req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => {
                with_headers(self.agent.get(&req.path), &req.headers).call()
            }
            (HttpMethod::Delete, _) => {
                with_headers(self.agent.delete(&req.path), &req.headers).call()
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                with_headers(self.agent.post(&req.path), &req.headers).send_empty()
            }
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => {
                with_headers(self.agent.patch(&req.path), &req.headers).send_empty()
            }
        };

        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
