//! Aggregate insight and leaderboard handlers.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::LeaderboardParams;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::persistence::models::{InsightsSummary, LeaderboardEntry};

/// `GET /users/:id/insights` — Aggregate workout insights.
///
/// # Errors
///
/// Returns [`TrackerError::Database`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/insights",
    tag = "Insights",
    summary = "Aggregate workout insights",
    description = "Count, total, average, and minimum workout duration plus the heaviest weight lifted. A user with no workouts gets all zeroes, never nulls.",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Aggregate summary", body = InsightsSummary),
    )
)]
pub async fn insights(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    let summary = state.store.insights(id).await?;
    Ok(Json(summary))
}

/// `GET /users/:id/leaderboard` — Rank the user and friends by total
/// workout minutes.
///
/// # Errors
///
/// Returns [`TrackerError::UnsupportedMetric`] for any metric other
/// than `total_minutes`.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/leaderboard",
    tag = "Insights",
    summary = "Friend leaderboard",
    description = "Ranks the user plus everyone they follow by total workout minutes, highest first. Only the total_minutes metric is supported.",
    params(
        ("id" = i64, Path, description = "User ID"),
        LeaderboardParams,
    ),
    responses(
        (status = 200, description = "Leaderboard, empty when nobody has workouts", body = Vec<LeaderboardEntry>),
        (status = 400, description = "Unsupported metric", body = ErrorResponse),
    )
)]
pub async fn leaderboard(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, TrackerError> {
    params.ensure_supported()?;
    let entries = state.store.leaderboard(id).await?;
    Ok(Json(entries))
}

/// Insight routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/insights", get(insights))
        .route("/users/{id}/leaderboard", get(leaderboard))
}
