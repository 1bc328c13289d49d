//! Fitness goal CRUD operations.

use super::models::Goal;
use super::store::{PostgresStore, store_error};
use crate::error::TrackerError;

impl PostgresStore {
    /// Creates a goal for a user. `current_value` starts at the store
    /// default of zero and is only ever changed by [`Self::update_goal`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn create_goal(
        &self,
        user_id: i64,
        description: &str,
        target_value: f64,
    ) -> Result<(), TrackerError> {
        sqlx::query("INSERT INTO goals (user_id, description, target_value) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(description)
            .bind(target_value)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        tracing::info!(user_id, "goal created");
        Ok(())
    }

    /// Lists a user's goals in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn read_goals(&self, user_id: i64) -> Result<Vec<Goal>, TrackerError> {
        let rows = sqlx::query_as::<_, (i64, String, f64, f64)>(
            "SELECT id, description, target_value, current_value \
             FROM goals WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, description, target_value, current_value)| Goal {
                id,
                description,
                target_value,
                current_value,
            })
            .collect())
    }

    /// Updates a goal's description, target, and current value.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GoalNotFound`] when no row matched, or
    /// [`TrackerError::Database`] on store failure.
    pub async fn update_goal(
        &self,
        goal_id: i64,
        description: &str,
        target_value: f64,
        current_value: f64,
    ) -> Result<(), TrackerError> {
        let result = sqlx::query(
            "UPDATE goals SET description = $1, target_value = $2, current_value = $3 \
             WHERE id = $4",
        )
        .bind(description)
        .bind(target_value)
        .bind(current_value)
        .bind(goal_id)
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(TrackerError::GoalNotFound(goal_id));
        }
        Ok(())
    }

    /// Deletes a goal by ID.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::GoalNotFound`] when no row matched, or
    /// [`TrackerError::Database`] on store failure.
    pub async fn delete_goal(&self, goal_id: i64) -> Result<(), TrackerError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(goal_id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(TrackerError::GoalNotFound(goal_id));
        }
        Ok(())
    }
}
