//! User profile CRUD operations.

use super::models::User;
use super::store::{PostgresStore, is_unique_violation, store_error};
use crate::error::TrackerError;

impl PostgresStore {
    /// Creates a new user profile and returns the generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::EmailExists`] when the email is already
    /// taken, or [`TrackerError::Database`] on any other store failure.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        weight_kg: f64,
    ) -> Result<i64, TrackerError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, email, weight_kg) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(weight_kg)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                TrackerError::EmailExists(email.to_string())
            } else {
                store_error(e)
            }
        })?;

        tracing::info!(user_id = id, "user created");
        Ok(id)
    }

    /// Retrieves a user profile by ID. A missing row is `Ok(None)`, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn read_user(&self, user_id: i64) -> Result<Option<User>, TrackerError> {
        let row = sqlx::query_as::<_, (i64, String, String, f64)>(
            "SELECT id, name, email, weight_kg FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|(id, name, email, weight_kg)| User {
            id,
            name,
            email,
            weight_kg,
        }))
    }

    /// Looks up a user profile by email, for the login flow.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, TrackerError> {
        let row = sqlx::query_as::<_, (i64, String, String, f64)>(
            "SELECT id, name, email, weight_kg FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(row.map(|(id, name, email, weight_kg)| User {
            id,
            name,
            email,
            weight_kg,
        }))
    }

    /// Updates a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UserNotFound`] when no row matched,
    /// [`TrackerError::EmailExists`] when the new email collides with
    /// another user, or [`TrackerError::Database`] on store failure.
    pub async fn update_user(
        &self,
        user_id: i64,
        name: &str,
        email: &str,
        weight_kg: f64,
    ) -> Result<(), TrackerError> {
        let result =
            sqlx::query("UPDATE users SET name = $1, email = $2, weight_kg = $3 WHERE id = $4")
                .bind(name)
                .bind(email)
                .bind(weight_kg)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    if is_unique_violation(&e) {
                        TrackerError::EmailExists(email.to_string())
                    } else {
                        store_error(e)
                    }
                })?;

        if result.rows_affected() == 0 {
            return Err(TrackerError::UserNotFound(user_id));
        }
        Ok(())
    }

    /// Deletes a user and everything the user owns in one transaction:
    /// friendship edges in both directions, goals, exercises, workouts,
    /// then the profile row itself.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::UserNotFound`] when no profile row
    /// matched (the transaction rolls back), or
    /// [`TrackerError::Database`] on store failure.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), TrackerError> {
        let mut tx = self.pool.begin().await.map_err(store_error)?;

        sqlx::query("DELETE FROM friends WHERE user_id = $1 OR friend_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        sqlx::query("DELETE FROM goals WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        sqlx::query(
            "DELETE FROM exercises WHERE workout_id IN \
             (SELECT id FROM workouts WHERE user_id = $1)",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(store_error)?;

        sqlx::query("DELETE FROM workouts WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(store_error)?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the cascade.
            return Err(TrackerError::UserNotFound(user_id));
        }

        tx.commit().await.map_err(store_error)?;
        tracing::info!(user_id, "user deleted with owned rows");
        Ok(())
    }
}
