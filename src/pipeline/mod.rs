//! Request/response normalization pipeline.
//!
//! # Data Flow
//! ```text
//! Request
//!     → RequestMiddleware (normalize.rs: KeyFilter then KeyTransformer per field)
//!     → downstream Handler
//!     → ResponseMiddleware (normalize.rs: KeyTransformer on the body)
//!     → Response
//!
//! Document handlers:
//!     → DocumentMiddleware (required/name fields only)
//! ```
//!
//! # Design Decisions
//! - Request and Response are owned values; stages return new ones
//! - One Handler trait with a direct and a continuation call shape
//! - Normalization is a pure function called identically from both shapes

pub mod handler;
pub mod message;
pub mod middleware;
pub mod normalize;

pub use handler::{Continuation, Handler, HandlerError, HandlerResult, Raise, Respond};
pub use message::{Request, RequestField, Response};
pub use middleware::{
    DocumentMiddleware, RequestMiddleware, ResponseMiddleware, ResponseStage, ResponseTransform,
};
pub use normalize::{normalize_document_response, normalize_request, normalize_response};
