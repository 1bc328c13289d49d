//! Store handle and shared sqlx error mapping.

use sqlx::PgPool;

use crate::error::TrackerError;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed persistence layer using `sqlx::PgPool`.
///
/// The pool is built once at startup; each operation checks a
/// connection out for exactly the duration of its statements, so
/// release on every exit path is guaranteed by the pool itself.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pub(crate) pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Returns true when the error is a unique-constraint violation, so
/// callers can surface a distinguishable "already exists" failure.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

/// Logs and converts any other sqlx failure into the generic store error.
pub(crate) fn store_error(err: sqlx::Error) -> TrackerError {
    tracing::error!(error = %err, "database operation failed");
    TrackerError::Database(err.to_string())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }

    #[test]
    fn store_error_produces_generic_database_variant() {
        let err = store_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, TrackerError::Database(_)));
    }
}
