//! REST endpoint handlers organized by resource.

pub mod friend;
pub mod goal;
pub mod insight;
pub mod system;
pub mod user;
pub mod workout;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(user::routes())
        .merge(workout::routes())
        .merge(friend::routes())
        .merge(goal::routes())
        .merge(insight::routes())
}
