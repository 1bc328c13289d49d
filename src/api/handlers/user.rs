//! User profile handlers: login lookup, create, read, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{CreateUserResponse, LoginRequest, UserProfileRequest};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, TrackerError};
use crate::persistence::models::User;

/// `POST /login` — Look up a profile by email.
///
/// This is the whole of authentication for the single-user tracker: a
/// known email returns the profile, an unknown one returns 404 so the
/// client can offer profile creation.
///
/// # Errors
///
/// Returns a 404 when the email resolves to no profile, or
/// [`TrackerError::Database`] on store failure.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Users",
    summary = "Look up a profile by email",
    description = "Finds the user profile for the given email. Unknown emails return 404 so the client can offer profile creation.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Profile found", body = User),
        (status = 404, description = "No profile with this email", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    let user = state
        .store
        .find_user_by_email(&req.email)
        .await?
        .ok_or(TrackerError::FriendNotFound(req.email))?;

    Ok(Json(user))
}

/// `POST /users` — Create a new user profile.
///
/// # Errors
///
/// Returns [`TrackerError::EmailExists`] for a duplicate email or
/// [`TrackerError::InvalidRequest`] for out-of-range fields.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    summary = "Create a user profile",
    description = "Creates a profile with name, unique email, and weight. Returns the generated ID.",
    request_body = UserProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = CreateUserResponse),
        (status = 400, description = "Invalid profile fields", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserProfileRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    req.validate()?;
    let id = state
        .store
        .create_user(&req.name, &req.email, req.weight_kg)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateUserResponse { id })))
}

/// `GET /users/:id` — Read a user profile.
///
/// # Errors
///
/// Returns [`TrackerError::UserNotFound`] if the profile does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Read a user profile",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn read_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    let user = state
        .store
        .read_user(id)
        .await?
        .ok_or(TrackerError::UserNotFound(id))?;

    Ok(Json(user))
}

/// `PUT /users/:id` — Update a user profile.
///
/// # Errors
///
/// Returns [`TrackerError::UserNotFound`] if no row matched, or
/// [`TrackerError::EmailExists`] when the new email collides.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Update a user profile",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    request_body = UserProfileRequest,
    responses(
        (status = 204, description = "Profile updated"),
        (status = 400, description = "Invalid profile fields", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UserProfileRequest>,
) -> Result<impl IntoResponse, TrackerError> {
    req.validate()?;
    state
        .store
        .update_user(id, &req.name, &req.email, req.weight_kg)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /users/:id` — Delete a user profile and everything it owns.
///
/// # Errors
///
/// Returns [`TrackerError::UserNotFound`] if the profile does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    summary = "Delete a user profile",
    description = "Deletes the profile together with its workouts, exercises, goals, and friendship edges in one transaction.",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackerError> {
    state.store.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// User profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/users", post(create_user))
        .route(
            "/users/{id}",
            put(update_user).get(read_user).delete(delete_user),
        )
}
