//! Domain-shaped records returned by the persistence layer.
//!
//! Rows are decoded from the store as tuples and mapped into these
//! structs; nothing here outlives a single store call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user profile row from the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Generated user ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Body weight in kilograms.
    pub weight_kg: f64,
}

/// One exercise within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    /// Exercise name (e.g. `"Bench Press"`).
    pub name: String,
    /// Number of sets.
    pub sets: i32,
    /// Repetitions per set.
    pub reps: i32,
    /// Weight lifted in kilograms.
    pub weight_kg: f64,
}

/// A workout with its ordered exercises, regrouped from the join rows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Workout {
    /// Date the workout took place.
    pub date: NaiveDate,
    /// Total duration in minutes.
    pub duration_minutes: i32,
    /// Exercises in the order they were logged.
    pub exercises: Vec<Exercise>,
}

/// A friend entry as shown in the friend list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Friend {
    /// Friend's display name.
    pub name: String,
    /// Friend's email address.
    pub email: String,
}

/// A fitness goal row from the `goals` table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Goal {
    /// Generated goal ID.
    pub id: i64,
    /// Free-text description of the goal.
    pub description: String,
    /// Target value to reach.
    pub target_value: f64,
    /// Current value, only ever set by an explicit update.
    pub current_value: f64,
}

impl Goal {
    /// Fraction of the target reached, clamped to a zero floor when the
    /// target is not positive.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_value > 0.0 {
            self.current_value / self.target_value
        } else {
            0.0
        }
    }
}

/// Aggregate insights over a user's workout history.
///
/// Every field is zero when the user has no workouts; the store's NULL
/// aggregates never leak out of the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsightsSummary {
    /// Total number of workouts logged.
    pub total_workouts: i64,
    /// Sum of all workout durations in minutes.
    pub total_duration: i64,
    /// Average workout duration in minutes.
    pub avg_duration: f64,
    /// Heaviest weight lifted across all exercises, in kilograms.
    pub max_weight_lifted: f64,
    /// Shortest workout duration in minutes.
    pub min_duration: i32,
}

/// One row of the duration leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    /// User's display name.
    pub name: String,
    /// Total workout minutes across all workouts.
    pub total_minutes: i64,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn goal(target: f64, current: f64) -> Goal {
        Goal {
            id: 1,
            description: "Run 100 km".to_string(),
            target_value: target,
            current_value: current,
        }
    }

    #[test]
    fn progress_reaches_one_at_target() {
        assert!((goal(10.0, 10.0).progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_fractional_below_target() {
        assert!((goal(10.0, 2.5).progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_guards_non_positive_target() {
        assert_eq!(goal(0.0, 5.0).progress(), 0.0);
        assert_eq!(goal(-3.0, 5.0).progress(), 0.0);
    }
}
