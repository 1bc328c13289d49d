//! Workout logging DTOs.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::TrackerError;
use crate::persistence::models::Exercise;

/// Request body for `POST /users/{id}/workouts`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateWorkoutRequest {
    /// Date the workout took place.
    pub date: NaiveDate,
    /// Total duration in minutes (min 1).
    pub duration_minutes: i32,
    /// Exercises in logged order; at least one is required.
    pub exercises: Vec<Exercise>,
}

impl CreateWorkoutRequest {
    /// Applies the form-layer range rules: duration at least one minute,
    /// a non-empty exercise list, and per-exercise positive sets/reps
    /// with a non-negative weight.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidRequest`] naming the failing field.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.duration_minutes < 1 {
            return Err(TrackerError::InvalidRequest(
                "duration_minutes must be at least 1".to_string(),
            ));
        }
        if self.exercises.is_empty() {
            return Err(TrackerError::InvalidRequest(
                "at least one exercise is required".to_string(),
            ));
        }
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                return Err(TrackerError::InvalidRequest(
                    "exercise name must not be empty".to_string(),
                ));
            }
            if exercise.sets < 1 || exercise.reps < 1 {
                return Err(TrackerError::InvalidRequest(format!(
                    "sets and reps must be at least 1 for {}",
                    exercise.name
                )));
            }
            if exercise.weight_kg < 0.0 {
                return Err(TrackerError::InvalidRequest(format!(
                    "weight_kg must not be negative for {}",
                    exercise.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn exercise(name: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            sets: 3,
            reps: 10,
            weight_kg: 60.0,
        }
    }

    fn request(exercises: Vec<Exercise>) -> CreateWorkoutRequest {
        let Some(date) = NaiveDate::from_ymd_opt(2024, 3, 5) else {
            panic!("valid date");
        };
        CreateWorkoutRequest {
            date,
            duration_minutes: 45,
            exercises,
        }
    }

    #[test]
    fn workout_with_exercises_passes() {
        let req = request(vec![exercise("Bench"), exercise("Row")]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_exercise_list_is_rejected() {
        assert!(request(Vec::new()).validate().is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut req = request(vec![exercise("Bench")]);
        req.duration_minutes = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_exercise_is_rejected() {
        let mut bad = exercise("Bench");
        bad.sets = 0;
        assert!(request(vec![bad]).validate().is_err());

        let mut bad = exercise("Row");
        bad.weight_kg = -5.0;
        assert!(request(vec![bad]).validate().is_err());
    }
}
