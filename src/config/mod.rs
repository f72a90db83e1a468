//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, warn on unknown conventions)
//!     → NormalizerConfig (immutable)
//!     → Options::request_casing() / response_casing() at middleware construction
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Defaults are resolved once, when a middleware is built
//! - Unknown convention names are not an error

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{NormalizerConfig, Options, RequestCasing, ResponseCasing};
