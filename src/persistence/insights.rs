//! Aggregate insights and the friend leaderboard.

use super::models::{InsightsSummary, LeaderboardEntry};
use super::store::{PostgresStore, store_error};
use crate::error::TrackerError;

impl PostgresStore {
    /// Computes aggregate insights over a user's workout history.
    ///
    /// All aggregates COALESCE to zero in SQL, so a user with no
    /// workouts gets an all-zero summary rather than nulls.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn insights(&self, user_id: i64) -> Result<InsightsSummary, TrackerError> {
        let (total_workouts, total_duration, avg_duration, min_duration) =
            sqlx::query_as::<_, (i64, i64, f64, i32)>(
                "SELECT COUNT(*), \
                 COALESCE(SUM(duration_minutes), 0)::BIGINT, \
                 COALESCE(AVG(duration_minutes), 0)::DOUBLE PRECISION, \
                 COALESCE(MIN(duration_minutes), 0) \
                 FROM workouts WHERE user_id = $1",
            )
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(store_error)?;

        let max_weight_lifted = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(MAX(e.weight_kg), 0)::DOUBLE PRECISION \
             FROM exercises e \
             JOIN workouts w ON e.workout_id = w.id \
             WHERE w.user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(InsightsSummary {
            total_workouts,
            total_duration,
            avg_duration,
            max_weight_lifted,
            min_duration,
        })
    }

    /// Ranks the user and everyone the user has an outgoing friendship
    /// edge to by total workout minutes, highest first.
    ///
    /// Candidates without any workouts drop out of the join, so a user
    /// with no friends and no workouts gets an empty leaderboard.
    /// Grouping is by user ID, so two distinct users sharing a display
    /// name stay separate rows; ties break by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn leaderboard(&self, user_id: i64) -> Result<Vec<LeaderboardEntry>, TrackerError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT u.name, SUM(w.duration_minutes)::BIGINT AS total_minutes \
             FROM users u \
             JOIN workouts w ON u.id = w.user_id \
             WHERE u.id = $1 \
             OR u.id IN (SELECT friend_id FROM friends WHERE user_id = $1) \
             GROUP BY u.id, u.name \
             ORDER BY total_minutes DESC, u.name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(name, total_minutes)| LeaderboardEntry {
                name,
                total_minutes,
            })
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn zero_state_summary_has_no_nulls() {
        // The COALESCE guards in the insights query map an empty workout
        // history onto exactly this shape.
        let summary = InsightsSummary {
            total_workouts: 0,
            total_duration: 0,
            avg_duration: 0.0,
            max_weight_lifted: 0.0,
            min_duration: 0,
        };
        let Ok(json) = serde_json::to_value(&summary) else {
            panic!("summary serializes");
        };
        assert_eq!(json["total_workouts"], 0);
        assert_eq!(json["avg_duration"], 0.0);
        assert_eq!(json["max_weight_lifted"], 0.0);
    }
}
