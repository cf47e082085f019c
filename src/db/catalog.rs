//! Schema catalog queries.
//!
//! Both queries read `information_schema.tables`. System schemas are
//! excluded so the counts reflect the operator's schema rather than the
//! engine's own catalog tables. Identifier columns are cast to VARCHAR
//! before leaving the server: Postgres exposes `table_name` with its
//! `name` type, which the Any driver cannot decode.

use sqlx::{AnyPool, Row};

use crate::error::AppError;

const COUNT_TABLES_SQL: &str =
    "SELECT COUNT(DISTINCT CAST(table_name AS VARCHAR(255))) FROM information_schema.tables \
     WHERE table_schema NOT IN ('pg_catalog', 'information_schema', 'mysql', 'performance_schema', 'sys')";

const LIST_TABLES_SQL: &str =
    "SELECT DISTINCT CAST(table_name AS VARCHAR(255)) FROM information_schema.tables \
     WHERE table_schema NOT IN ('pg_catalog', 'information_schema', 'mysql', 'performance_schema', 'sys')";

/// Count distinct table names visible in the schema catalog.
pub async fn count_tables(pool: &AnyPool) -> Result<i64, AppError> {
    let count: i64 = sqlx::query_scalar(COUNT_TABLES_SQL)
        .fetch_one(pool)
        .await
        .map_err(AppError::QueryFailed)?;

    tracing::info!(tables = count, "DB: discovered tables from information_schema");

    Ok(count)
}

/// List distinct table names in catalog order.
pub async fn list_tables(pool: &AnyPool) -> Result<Vec<String>, AppError> {
    let rows = sqlx::query(LIST_TABLES_SQL)
        .fetch_all(pool)
        .await
        .map_err(AppError::QueryFailed)?;

    let mut names = Vec::with_capacity(rows.len());
    for row in &rows {
        let name: String = row.try_get(0).map_err(AppError::QueryFailed)?;
        tracing::debug!(table = %name, "DB: found table");
        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_columns_are_cast_for_the_any_driver() {
        // Without the cast, Postgres returns `table_name` as its `name`
        // type and row decoding fails on a healthy database, which would
        // escalate to a fatal QueryFailed.
        assert!(COUNT_TABLES_SQL.contains("CAST(table_name AS VARCHAR(255))"));
        assert!(LIST_TABLES_SQL.contains("CAST(table_name AS VARCHAR(255))"));
    }

    #[test]
    fn test_queries_exclude_system_schemas() {
        for sql in [COUNT_TABLES_SQL, LIST_TABLES_SQL] {
            assert!(sql.contains("'pg_catalog'"));
            assert!(sql.contains("'information_schema'"));
        }
    }
}
