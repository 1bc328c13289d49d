//! Workout logging and history retrieval.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::models::{Exercise, Workout};
use super::store::{PostgresStore, store_error};
use crate::error::TrackerError;

/// One flattened row of the workouts/exercises join:
/// `(workout_id, date, duration, exercise_name, sets, reps, weight_kg)`.
type WorkoutRow = (i64, NaiveDate, i32, String, i32, i32, f64);

impl PostgresStore {
    /// Logs a workout and all its exercises atomically: either every row
    /// commits or none do.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidRequest`] when `exercises` is
    /// empty, or [`TrackerError::Database`] on store failure (the whole
    /// workout rolls back).
    pub async fn create_workout(
        &self,
        user_id: i64,
        date: NaiveDate,
        duration_minutes: i32,
        exercises: &[Exercise],
    ) -> Result<(), TrackerError> {
        if exercises.is_empty() {
            return Err(TrackerError::InvalidRequest(
                "a workout requires at least one exercise".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await.map_err(store_error)?;

        let workout_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO workouts (user_id, workout_date, duration_minutes) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user_id)
        .bind(date)
        .bind(duration_minutes)
        .fetch_one(&mut *tx)
        .await
        .map_err(store_error)?;

        for exercise in exercises {
            sqlx::query(
                "INSERT INTO exercises (workout_id, exercise_name, sets, reps, weight_kg) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(workout_id)
            .bind(&exercise.name)
            .bind(exercise.sets)
            .bind(exercise.reps)
            .bind(exercise.weight_kg)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;
        }

        tx.commit().await.map_err(store_error)?;
        tracing::info!(
            user_id,
            workout_id,
            exercise_count = exercises.len(),
            "workout logged"
        );
        Ok(())
    }

    /// Retrieves all workouts for a user, newest first, each with its
    /// exercises in logged order.
    ///
    /// The join returns one row per (workout, exercise) pair; the rows
    /// are folded back into nested records without re-sorting, so the
    /// query's date-descending workout order and the returned exercise
    /// order are preserved as-is.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn read_workouts(&self, user_id: i64) -> Result<Vec<Workout>, TrackerError> {
        let rows = sqlx::query_as::<_, WorkoutRow>(
            "SELECT w.id, w.workout_date, w.duration_minutes, \
             e.exercise_name, e.sets, e.reps, e.weight_kg \
             FROM workouts w \
             JOIN exercises e ON w.id = e.workout_id \
             WHERE w.user_id = $1 \
             ORDER BY w.workout_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(fold_workout_rows(rows))
    }
}

/// Regroups flattened join rows into one record per workout, keyed by
/// workout ID. Workouts keep their first-seen position and exercises
/// keep the row order, even when rows for one workout are not
/// contiguous.
fn fold_workout_rows(rows: Vec<WorkoutRow>) -> Vec<Workout> {
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut workouts: Vec<Workout> = Vec::new();

    for (workout_id, date, duration_minutes, name, sets, reps, weight_kg) in rows {
        let exercise = Exercise {
            name,
            sets,
            reps,
            weight_kg,
        };
        if let Some(&idx) = positions.get(&workout_id) {
            if let Some(workout) = workouts.get_mut(idx) {
                workout.exercises.push(exercise);
            }
        } else {
            positions.insert(workout_id, workouts.len());
            workouts.push(Workout {
                date,
                duration_minutes,
                exercises: vec![exercise],
            });
        }
    }

    workouts
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        let Some(d) = NaiveDate::from_ymd_opt(2024, 3, day) else {
            panic!("valid date");
        };
        d
    }

    fn row(workout_id: i64, day: u32, name: &str) -> WorkoutRow {
        (workout_id, date(day), 45, name.to_string(), 3, 10, 60.0)
    }

    #[test]
    fn fold_preserves_exercise_order_within_a_workout() {
        let rows = vec![row(1, 5, "Bench"), row(1, 5, "Row")];
        let workouts = fold_workout_rows(rows);

        assert_eq!(workouts.len(), 1);
        let Some(workout) = workouts.first() else {
            panic!("one workout expected");
        };
        let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench", "Row"]);
    }

    #[test]
    fn fold_preserves_first_seen_workout_order() {
        // Newest-first order as the query returns it.
        let rows = vec![row(2, 9, "Squat"), row(1, 5, "Bench")];
        let workouts = fold_workout_rows(rows);

        assert_eq!(workouts.len(), 2);
        let dates: Vec<NaiveDate> = workouts.iter().map(|w| w.date).collect();
        assert_eq!(dates, vec![date(9), date(5)]);
    }

    #[test]
    fn fold_handles_non_contiguous_rows_for_one_workout() {
        // Two workouts on the same date may interleave in the join output.
        let rows = vec![
            row(1, 5, "Bench"),
            row(2, 5, "Squat"),
            row(1, 5, "Row"),
        ];
        let workouts = fold_workout_rows(rows);

        assert_eq!(workouts.len(), 2);
        let Some(first) = workouts.first() else {
            panic!("two workouts expected");
        };
        let names: Vec<&str> = first.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench", "Row"]);
    }

    #[test]
    fn fold_of_no_rows_is_empty() {
        assert!(fold_workout_rows(Vec::new()).is_empty());
    }
}
