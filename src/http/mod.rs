//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, fixed timeout/body-cap layers)
//!     → request-log middleware (method, version, remote, path)
//!     → handler reads shared ApiState (start time, debug, pool)
//!     → response.rs (envelope, serialized immediately)
//! ```

pub mod response;
pub mod server;

pub use response::Envelope;
pub use server::{ApiServer, ApiState};
