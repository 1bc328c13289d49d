//! Fitness goal handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{CreateGoalRequest, GoalResponse, UpdateGoalRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};

/// `POST /users/:id/goals` — Create a goal.
///
/// The goal starts with a current value of zero; only an explicit
/// update ever changes it.
///
/// # Errors
///
/// Returns [`TrackerError::Database`] on store failure.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/goals",
    tag = "Goals",
    summary = "Create a goal",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created"),
    )
)]
pub async fn create_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    state
        .store
        .create_goal(id, &req.description, req.target_value)
        .await?;

    Ok(StatusCode::CREATED)
}

/// `GET /users/:id/goals` — List goals with computed progress.
///
/// # Errors
///
/// Returns [`TrackerError::Database`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/goals",
    tag = "Goals",
    summary = "List goals",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Goals with progress", body = Vec<GoalResponse>),
    )
)]
pub async fn read_goals(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    let goals: Vec<GoalResponse> = state
        .store
        .read_goals(id)
        .await?
        .into_iter()
        .map(GoalResponse::from)
        .collect();

    Ok(Json(goals))
}

/// `PUT /goals/:id` — Update a goal.
///
/// # Errors
///
/// Returns [`TrackerError::GoalNotFound`] if no row matched.
#[utoipa::path(
    put,
    path = "/api/v1/goals/{id}",
    tag = "Goals",
    summary = "Update a goal",
    params(
        ("id" = i64, Path, description = "Goal ID"),
    ),
    request_body = UpdateGoalRequest,
    responses(
        (status = 204, description = "Goal updated"),
        (status = 404, description = "Goal not found", body = ErrorResponse),
    )
)]
pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateGoalRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    state
        .store
        .update_goal(id, &req.description, req.target_value, req.current_value)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /goals/:id` — Delete a goal.
///
/// # Errors
///
/// Returns [`TrackerError::GoalNotFound`] if no row matched.
#[utoipa::path(
    delete,
    path = "/api/v1/goals/{id}",
    tag = "Goals",
    summary = "Delete a goal",
    params(
        ("id" = i64, Path, description = "Goal ID"),
    ),
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 404, description = "Goal not found", body = ErrorResponse),
    )
)]
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    state.store.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Goal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/goals", post(create_goal).get(read_goals))
        .route("/goals/{id}", put(update_goal).delete(delete_goal))
}
