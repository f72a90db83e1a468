//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → authorization.rs (Authorizer check, 401 on denial)
//!     → Pass to the wrapped handler
//! ```

pub mod authorization;

pub use authorization::{AllowAll, AuthorizationGate, Authorizer};
