//! Workout logging and history handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::CreateWorkoutRequest;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::persistence::models::Workout;

/// `POST /users/:id/workouts` — Log a workout with its exercises.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidRequest`] for out-of-range fields or
/// an empty exercise list; any store failure rolls the whole workout
/// back.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/workouts",
    tag = "Workouts",
    summary = "Log a workout",
    description = "Inserts the workout row and all exercise rows in one transaction; either everything commits or nothing does.",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout logged"),
        (status = 400, description = "Invalid workout fields", body = ErrorResponse),
    )
)]
pub async fn create_workout(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    req.validate()?;
    state
        .store
        .create_workout(id, req.date, req.duration_minutes, &req.exercises)
        .await?;

    Ok(StatusCode::CREATED)
}

/// `GET /users/:id/workouts` — Workout history, newest first.
///
/// # Errors
///
/// Returns [`TrackerError::Database`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/workouts",
    tag = "Workouts",
    summary = "List workouts",
    description = "Returns all workouts for the user ordered by date descending, each with its exercises in logged order.",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Workout history", body = Vec<Workout>),
    )
)]
pub async fn read_workouts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    let workouts = state.store.read_workouts(id).await?;
    Ok(Json(workouts))
}

/// Workout routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/users/{id}/workouts",
        post(create_workout).get(read_workouts),
    )
}
