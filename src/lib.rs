//! Structural key-case normalization for HTTP request/response pipelines.
//!
//! Rewrites every key of nested payloads from one casing convention to
//! another (camelCase, PascalCase, snake_case, kebab-case,
//! SCREAMING_SNAKE_CASE, Camel_Snake_Case).
//!
//! ```text
//! request → RequestMiddleware (filter keys not in `from`, rewrite to `to`)
//!         → handler
//!         → ResponseMiddleware (rewrite body keys to `to`)
//!         → response
//! ```

// Core
pub mod casing;
pub mod tree;
pub mod walk;

// Pipeline
pub mod pipeline;
pub mod security;

// Cross-cutting concerns
pub mod config;
pub mod http;
pub mod observability;

pub use casing::{letter_case_key, CasingConvention, Key};
pub use config::{NormalizerConfig, Options};
pub use pipeline::{Handler, Request, Response};
pub use tree::Node;
pub use walk::{filter_keys, transform_document_fields, transform_keys};
