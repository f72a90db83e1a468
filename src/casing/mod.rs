//! Key casing subsystem.
//!
//! # Responsibilities
//! - Name the supported casing conventions
//! - Convert a single key into a convention
//! - Decide whether a key is already expressed in a convention
//!
//! # Design Decisions
//! - Keys are a closed enum; conversion is one explicit `match`
//! - Numeric and boolean keys come back as identifiers after conversion
//! - An unrecognized convention is a no-op apart from identifier coercion

pub mod convention;
pub mod key;

pub use convention::{CasingConvention, Coercion};
pub use key::{convert, is_self_consistent, letter_case_key, Key};
