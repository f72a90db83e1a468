//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! walk / pipeline / security / http produce:
//!     → tracing events (stage decisions, dropped keys, denials)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
