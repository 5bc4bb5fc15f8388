//! The four todo operations with response caching.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Cache effects live in `parse_*`, where success is known: a parsed list
//! is sorted newest-first and stored, a parsed write invalidates the
//! regions named by the operation's `*_INVALIDATES` constant. The executing
//! methods (`list_todos`, `add_todo`, `update_todo`, `delete_todo`) compose
//! build → transport → parse, so every cache and ordering property is
//! testable without a network.

use tracing::debug;

use crate::cache::{CacheRegion, CacheStatus, ResponseCache};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{NewTodo, Todo};

/// Base URL used by `TodoClient::default`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3500";

/// Cache regions staled by a successful `add_todo`.
pub const ADD_TODO_INVALIDATES: &[CacheRegion] = &[CacheRegion::Todos];
/// Cache regions staled by a successful `update_todo`.
pub const UPDATE_TODO_INVALIDATES: &[CacheRegion] = &[CacheRegion::Todos];
/// Cache regions staled by a successful `delete_todo`.
pub const DELETE_TODO_INVALIDATES: &[CacheRegion] = &[CacheRegion::Todos];

/// Client for the todo API with an explicit, region-keyed response cache.
///
/// Reads are served from the cache while it is fresh; any successful write
/// invalidates the collection, forcing the next read to refetch. The client
/// is `Send + Sync` and usable behind a shared reference from multiple
/// threads; no ordering is guaranteed between calls racing on the wire.
pub struct TodoClient {
    base_url: String,
    transport: Transport,
    cache: ResponseCache,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: Transport::new(),
            cache: ResponseCache::new(),
        }
    }

    /// Whether `region` currently holds usable data or must be refetched.
    pub fn cache_status(&self, region: CacheRegion) -> CacheStatus {
        self.cache.status(region)
    }

    // -----------------------------------------------------------------------
    // Executing surface
    // -----------------------------------------------------------------------

    /// Fetch the collection, newest first. Served from cache when fresh.
    pub fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        if let Some(todos) = self.cache.get(CacheRegion::Todos) {
            return Ok(todos);
        }
        let req = self.build_list_todos();
        let response = self.transport.execute(&req)?;
        self.parse_list_todos(response)
    }

    /// Create a todo. The server assigns the id.
    pub fn add_todo(&self, input: &NewTodo) -> Result<Todo, ApiError> {
        let req = self.build_add_todo(input)?;
        let response = self.transport.execute(&req)?;
        self.parse_add_todo(response)
    }

    /// Update a todo, sending the complete object as the PATCH body.
    pub fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let req = self.build_update_todo(todo)?;
        let response = self.transport.execute(&req)?;
        self.parse_update_todo(response)
    }

    /// Delete a todo by id.
    pub fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        let req = self.build_delete_todo(id);
        let response = self.transport.execute(&req)?;
        self.parse_delete_todo(response)
    }

    // -----------------------------------------------------------------------
    // Request builders
    // -----------------------------------------------------------------------

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// The body carries every field of `todo`, not a diff of changed ones.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(todo).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{}", self.base_url, todo.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    // -----------------------------------------------------------------------
    // Response parsers
    // -----------------------------------------------------------------------

    /// Parse a list response, sort it newest-first, and cache it.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        let mut todos: Vec<Todo> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
        todos.sort_by(|a, b| b.id.cmp(&a.id));
        self.cache.insert(CacheRegion::Todos, todos.clone());
        Ok(todos)
    }

    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        let todo =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.invalidate(ADD_TODO_INVALIDATES);
        Ok(todo)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        let todo =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.invalidate(UPDATE_TODO_INVALIDATES);
        Ok(todo)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        self.invalidate(DELETE_TODO_INVALIDATES);
        Ok(())
    }

    /// Invalidate every region a write operation maps to. Failed writes
    /// never reach this point, so the cache only stales on confirmed
    /// server-side mutations.
    fn invalidate(&self, regions: &[CacheRegion]) {
        for region in regions {
            debug!(region = ?region, "write confirmed, invalidating");
            self.cache.invalidate(*region);
        }
    }
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Reject any status other than `expected` with the raw code and body.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
