//! Friendship handlers: add, list, and remove friends.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{AddFriendRequest, FriendQuery};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::persistence::models::Friend;

/// `POST /users/:id/friends` — Add a friend by email.
///
/// The edge is directed; no reciprocal edge is created for the friend.
///
/// # Errors
///
/// Returns [`TrackerError::FriendNotFound`] when the email resolves to
/// no user, or [`TrackerError::FriendshipExists`] for a duplicate edge.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/friends",
    tag = "Friends",
    summary = "Add a friend",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    request_body = AddFriendRequest,
    responses(
        (status = 201, description = "Friendship added"),
        (status = 404, description = "No user with this email", body = ErrorResponse),
        (status = 409, description = "Friendship already exists", body = ErrorResponse),
    )
)]
pub async fn create_friendship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AddFriendRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    state.store.create_friendship(id, &req.email).await?;
    Ok(StatusCode::CREATED)
}

/// `GET /users/:id/friends` — List the user's friends.
///
/// # Errors
///
/// Returns [`TrackerError::Database`] on store failure.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/friends",
    tag = "Friends",
    summary = "List friends",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Friend list, empty if none", body = Vec<Friend>),
    )
)]
pub async fn read_friends(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    let friends = state.store.read_friends(id).await?;
    Ok(Json(friends))
}

/// `DELETE /users/:id/friends?email=...` — Remove a friend by email.
///
/// # Errors
///
/// Returns [`TrackerError::FriendNotFound`] when the email resolves to
/// no user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/friends",
    tag = "Friends",
    summary = "Remove a friend",
    params(
        ("id" = i64, Path, description = "User ID"),
        FriendQuery,
    ),
    responses(
        (status = 204, description = "Friendship removed"),
        (status = 404, description = "No user with this email", body = ErrorResponse),
    )
)]
pub async fn delete_friendship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<FriendQuery>,
) -> Result<impl IntoResponse, TrackerError> {
    state.store.delete_friendship(id, &query.email).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Friendship routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/users/{id}/friends",
        post(create_friendship)
            .get(read_friends)
            .delete(delete_friendship),
    )
}
