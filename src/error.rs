//! Error taxonomy for the service.
//!
//! # Design Decisions
//! - Every fallible operation returns a typed error kind; nothing calls
//!   the process exit directly from a leaf function
//! - The lifecycle coordinator owns the fatality policy via `is_fatal`,
//!   so fail-fast decisions live in one place

use thiserror::Error;

/// Error kinds surfaced by the service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Opening or probing the database connection failed.
    ///
    /// Non-fatal at open time: the pool is still handed to later steps and
    /// the first real use (the backend sanity check) decides.
    #[error("database connection failed: {0}")]
    ConnectFailed(#[source] sqlx::Error),

    /// A catalog query could not be prepared, executed, or decoded.
    #[error("database query failed: {0}")]
    QueryFailed(#[source] sqlx::Error),

    /// The configured schema exposes zero tables.
    ///
    /// Indistinguishable from a wrong-schema misconfiguration, so the
    /// coordinator treats it as unrecoverable.
    #[error("no tables visible in the configured schema")]
    EmptyCatalog,

    /// A response envelope could not be serialized.
    #[error("response encoding failed: {0}")]
    EncodingFailed(#[source] serde_json::Error),

    /// The HTTP listener could not bind or serve.
    #[error("listener failed: {0}")]
    ListenFailed(#[source] std::io::Error),

    /// Configuration could not be resolved into a usable value.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Central fatality policy.
    ///
    /// A fatal error shuts the whole process down; there is no per-request
    /// degraded mode. `ConnectFailed` is the one deferred kind: the sanity
    /// check re-surfaces a dead backend as `QueryFailed`.
    pub fn is_fatal(&self) -> bool {
        match self {
            AppError::ConnectFailed(_) => false,
            AppError::QueryFailed(_)
            | AppError::EmptyCatalog
            | AppError::EncodingFailed(_)
            | AppError::ListenFailed(_)
            | AppError::Config(_) => true,
        }
    }
}
