//! Document tree model.
//!
//! Request and response payloads are carried as [`Node`] trees so that keys
//! can be more than strings (identifiers, numbers, booleans). JSON converts in
//! both directions; map order is preserved.

pub mod node;

pub use node::{Mapping, Node};
