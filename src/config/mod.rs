//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (cli.rs)
//!     → optional TOML file (loader.rs, when --config is given)
//!     → flag overrides applied on top
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed once by the lifecycle coordinator
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; no reload surface
//! - All fields have defaults except backend identity (host, schema,
//!   credentials), which must be supplied by the operator
//! - Validation separates syntactic (serde/clap) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::ConfigError;
pub use schema::{AppConfig, DatabaseConfig, ServerConfig};
