//! API client core for the remote todo service.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoService` pairs
//! it with a `Transport` to offer the four async operations: list, create,
//! toggle and delete.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the base URL and default
//!   headers from `ClientConfig`.
//! - Input is validated while building a request, so malformed input never
//!   reaches the transport.
//! - Failures split into `ValidationError` (local), `RemoteError` (non-2xx
//!   status) and `TransportError` (no response), all wrapped by `ApiError`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
#[cfg(feature = "testkit")]
pub mod testkit;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, RemoteError, TransportError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::TodoService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{NewTodoItem, TodoItem};
