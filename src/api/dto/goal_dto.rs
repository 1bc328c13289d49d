//! Fitness goal DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::Goal;

/// Request body for `POST /users/{id}/goals`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateGoalRequest {
    /// Free-text goal description.
    pub description: String,
    /// Target value to reach.
    pub target_value: f64,
}

/// Request body for `PUT /goals/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateGoalRequest {
    /// Updated description.
    pub description: String,
    /// Updated target value.
    pub target_value: f64,
    /// Updated current value; this is the only path that ever changes it.
    pub current_value: f64,
}

/// Goal as rendered on the dashboard, with computed progress.
#[derive(Debug, Serialize, ToSchema)]
pub struct GoalResponse {
    /// Goal ID.
    pub id: i64,
    /// Goal description.
    pub description: String,
    /// Target value.
    pub target_value: f64,
    /// Current value.
    pub current_value: f64,
    /// Fraction of the target reached (current / target).
    pub progress: f64,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        let progress = goal.progress();
        Self {
            id: goal.id,
            description: goal.description,
            target_value: goal.target_value,
            current_value: goal.current_value,
            progress,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_computed_progress() {
        let goal = Goal {
            id: 9,
            description: "Bench 100 kg".to_string(),
            target_value: 10.0,
            current_value: 10.0,
        };
        let response = GoalResponse::from(goal);
        assert!((response.progress - 1.0).abs() < f64::EPSILON);
    }
}
