//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing, initialized before any other work
//! - `RUST_LOG` always wins; the debug flag only widens the default
//! - No metrics surface in this service

pub mod logging;
