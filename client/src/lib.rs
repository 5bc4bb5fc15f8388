//! Cached data-access layer for the todo REST backend.
//!
//! # Overview
//! `TodoClient` issues four operations against a base URL — list, create,
//! update, delete — and keeps an in-memory response cache keyed by
//! `CacheRegion`. Reads are served from the cache while it is fresh; any
//! successful write invalidates the collection, forcing the next read to
//! refetch.
//!
//! # Design
//! - Each operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so request construction and
//!   response interpretation are deterministic and testable without I/O.
//!   The executing methods compose build → transport → parse.
//! - The cache is an explicit object owned by the client, not process-wide
//!   state. Write operations name the regions they invalidate through
//!   `const` slices, checked at compile time.
//! - List results are sorted by id descending (newest first) before being
//!   cached and returned.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod cache;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

mod transport;

pub use cache::{CacheRegion, CacheStatus, ResponseCache};
pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{NewTodo, Todo};
