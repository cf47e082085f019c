//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber exactly once
//! - Derive the default filter from the debug flag
//!
//! # Design Decisions
//! - `RUST_LOG` takes precedence over the derived default
//! - Plain fmt layer; log aggregation is an operator concern

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Must run before any other subsystem; later calls would panic, so this
/// is called once from `main`.
pub fn init(debug: bool) {
    let default_directive = if debug { "dbstatus=debug" } else { "dbstatus=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
