//! Database access subsystem.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig
//!     → descriptor.rs (pure URL construction, credentials escaped)
//!     → connection.rs (lazy pool + liveness probe)
//!     → catalog.rs (information_schema queries)
//! ```
//!
//! # Design Decisions
//! - Opening the pool never fails on a dead backend; a failed probe is
//!   logged and the fatal decision is deferred to the sanity check
//! - One pool per process; closing rights stay with the lifecycle
//!   coordinator, handlers hold non-owning clones

pub mod catalog;
pub mod connection;
pub mod descriptor;

pub use connection::open_pool;
pub use descriptor::build_descriptor;
