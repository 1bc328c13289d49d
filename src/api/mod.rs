//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; system routes
//! live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::user::login,
        handlers::user::create_user,
        handlers::user::read_user,
        handlers::user::update_user,
        handlers::user::delete_user,
        handlers::workout::create_workout,
        handlers::workout::read_workouts,
        handlers::friend::create_friendship,
        handlers::friend::read_friends,
        handlers::friend::delete_friendship,
        handlers::goal::create_goal,
        handlers::goal::read_goals,
        handlers::goal::update_goal,
        handlers::goal::delete_goal,
        handlers::insight::insights,
        handlers::insight::leaderboard,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Users", description = "Profile management and login lookup"),
        (name = "Workouts", description = "Workout logging and history"),
        (name = "Friends", description = "Directed friendship edges"),
        (name = "Goals", description = "Fitness goals and progress"),
        (name = "Insights", description = "Aggregate insights and leaderboard"),
        (name = "System", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}
