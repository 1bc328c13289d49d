//! Shared application state injected into all Axum handlers.

use crate::persistence::PostgresStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// PostgreSQL-backed store for all data access.
    pub store: PostgresStore,
}
