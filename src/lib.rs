//! # fittrack-gateway
//!
//! REST API gateway for a single-user fitness tracker backed by
//! PostgreSQL.
//!
//! The service is a thin coordination layer: every request maps onto
//! one self-contained persistence operation (a few parameterized SQL
//! statements in a single connection checkout, committed or rolled
//! back as a unit). All state lives in the store or in the client.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostgresStore (persistence/)
//!     │
//!     └── PostgreSQL (users, workouts, exercises, friends, goals)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
