//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (coordinator.rs):
//!     Record start time → Log environment → Open pool
//!     → Bind listener → Launch server + sanity check + signal watcher
//!
//! Shutdown (shutdown.rs + coordinator::finalize):
//!     Signal or fatal error → trigger broadcast → close pool → exit code
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → terminate
//! ```
//!
//! # Design Decisions
//! - Startup is sequential; the three Serving activities launch together
//! - Fatality is decided centrally from error kinds, not at call sites
//! - The finalize sequence is latched: it runs exactly once no matter
//!   which trigger fires first

pub mod coordinator;
pub mod shutdown;
pub mod signals;

pub use coordinator::{run, RunOutcome};
pub use shutdown::Shutdown;
