//! Pool establishment and liveness probing.

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::config::schema::DatabaseConfig;
use crate::db::descriptor::{build_descriptor, redacted};
use crate::error::AppError;

/// Upper bound on pooled connections; not an operator surface.
const MAX_POOL_CONNECTIONS: u32 = 10;

/// Open the connection pool for the configured backend and probe it once.
///
/// The pool is created lazily, so a dead or misconfigured backend does not
/// fail this call: the probe failure is logged at warn and the pool is
/// returned anyway. The sanity check is the first use that escalates. Only
/// a descriptor that cannot be constructed or parsed is an error here.
pub async fn open_pool(db: &DatabaseConfig) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();

    let descriptor = build_descriptor(db)?;
    tracing::info!(
        driver = %db.driver,
        descriptor = %redacted(&descriptor),
        "DB: opening connection pool"
    );

    let pool = AnyPoolOptions::new()
        .max_connections(MAX_POOL_CONNECTIONS)
        .connect_lazy(descriptor.as_str())
        .map_err(|e| AppError::Config(format!("invalid connection descriptor: {}", e)))?;

    match ping(&pool).await {
        Ok(()) => tracing::info!("DB: connection ready"),
        Err(e) => tracing::warn!(error = %e, "DB: liveness probe failed, deferring to sanity check"),
    }

    Ok(pool)
}

/// One-round-trip liveness probe.
pub async fn ping(pool: &AnyPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(AppError::ConnectFailed)
}
