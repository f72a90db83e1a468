//! axum adapter.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → middleware::request_case_middleware
//!         (buffer JSON body, parse query → pipeline::Request → normalize_request → rebuild)
//!     → handler
//!     → middleware::response_case_middleware
//!         (buffer JSON body → pipeline::Response → normalize_response → rebuild)
//!     → HTTP response
//! ```
//!
//! # Design Decisions
//! - Only JSON bodies are buffered; everything else streams through untouched
//! - Bodies that fail to parse are forwarded byte-for-byte
//! - Content-Length is dropped whenever a body is re-serialized

pub mod body;
pub mod middleware;

pub use body::MAX_BODY_BYTES;
pub use middleware::{document_case_middleware, request_case_middleware, response_case_middleware};
