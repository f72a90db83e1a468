//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for hosts and tests
//! - Honor `RUST_LOG`, falling back to a default directive
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Normalizer events are `debug` (per stage) and `trace` (per key)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "case_normalizer=info";

/// Install a global `fmt` subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(default_directive: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
