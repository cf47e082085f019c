//! Minimal JSON HTTP status API backed by a single relational connection pool.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                  dbstatus                     │
//!                  │                                               │
//!   GET /          │  ┌─────────┐     ┌────────────────────────┐  │
//!   GET /status ───┼─▶│  http   │────▶│  shared ApiState       │  │
//!   GET /tables    │  │ server  │     │  (start time, debug,   │  │
//!                  │  └─────────┘     │   pool handle)          │  │
//!                  │       │          └──────────┬─────────────┘  │
//!                  │       ▼                     ▼                │
//!                  │  ┌─────────┐     ┌────────────────────────┐  │
//!                  │  │ health  │────▶│   db (descriptor,      │──┼──▶ SQL backend
//!                  │  │ check   │     │   pool, catalog)       │  │
//!                  │  └─────────┘     └────────────────────────┘  │
//!                  │                                               │
//!                  │  ┌────────────────────────────────────────┐  │
//!                  │  │            Cross-Cutting Concerns       │  │
//!                  │  │  ┌─────────┐ ┌───────────┐ ┌─────────┐ │  │
//!                  │  │  │ config  │ │ lifecycle │ │observa- │ │  │
//!                  │  │  │         │ │ + signals │ │ bility  │ │  │
//!                  │  │  └─────────┘ └───────────┘ └─────────┘ │  │
//!                  │  └────────────────────────────────────────┘  │
//!                  └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod db;
pub mod http;

// Backend health
pub mod health;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::schema::AppConfig;
pub use error::AppError;
pub use http::ApiServer;
pub use lifecycle::Shutdown;

/// Application name used in startup logging.
pub const APP_NAME: &str = "dbstatus API server";

/// Build version reported by `/status`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
