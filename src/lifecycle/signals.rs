//! OS signal handling.
//!
//! # Responsibilities
//! - Resolve when the operator requests termination
//! - SIGINT and SIGTERM both terminate; no other signals are handled
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - On non-unix targets only ctrl-c is available

/// Wait until an OS termination request arrives.
pub async fn terminated() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
