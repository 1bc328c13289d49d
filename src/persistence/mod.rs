//! Persistence layer: PostgreSQL CRUD store for the tracker schema.
//!
//! [`PostgresStore`] wraps an `sqlx::PgPool` and exposes one method per
//! entity-action pair (users, workouts, friendships, goals, insights).
//! Every statement is parameter-bound, every failure is converted to a
//! [`crate::error::TrackerError`] at this boundary, and multi-statement
//! operations run inside a single transaction.

pub mod models;
pub mod store;

mod friends;
mod goals;
mod insights;
mod users;
mod workouts;

pub use store::PostgresStore;
