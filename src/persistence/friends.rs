//! Friendship edge operations.
//!
//! Friendships are directed: adding a friend creates a single
//! `(user_id, friend_id)` edge and no reciprocal edge.

use super::models::Friend;
use super::store::{PostgresStore, is_unique_violation, store_error};
use crate::error::TrackerError;

impl PostgresStore {
    /// Adds a friendship edge from `user_id` to the user with the given
    /// email.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::FriendNotFound`] when the email resolves
    /// to no user (nothing is mutated), [`TrackerError::FriendshipExists`]
    /// for a duplicate edge, or [`TrackerError::Database`] otherwise.
    pub async fn create_friendship(
        &self,
        user_id: i64,
        friend_email: &str,
    ) -> Result<(), TrackerError> {
        let friend_id = self.resolve_friend_id(friend_email).await?;

        sqlx::query("INSERT INTO friends (user_id, friend_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(friend_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    TrackerError::FriendshipExists
                } else {
                    store_error(e)
                }
            })?;

        tracing::info!(user_id, friend_id, "friendship added");
        Ok(())
    }

    /// Lists the users this user has an outgoing friendship edge to.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Database`] on store failure.
    pub async fn read_friends(&self, user_id: i64) -> Result<Vec<Friend>, TrackerError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT u.name, u.email FROM friends f \
             JOIN users u ON f.friend_id = u.id \
             WHERE f.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(name, email)| Friend { name, email })
            .collect())
    }

    /// Removes the friendship edge to the user with the given email.
    /// Deleting an edge that does not exist is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::FriendNotFound`] when the email resolves
    /// to no user, or [`TrackerError::Database`] on store failure.
    pub async fn delete_friendship(
        &self,
        user_id: i64,
        friend_email: &str,
    ) -> Result<(), TrackerError> {
        let friend_id = self.resolve_friend_id(friend_email).await?;

        sqlx::query("DELETE FROM friends WHERE user_id = $1 AND friend_id = $2")
            .bind(user_id)
            .bind(friend_id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;

        tracing::info!(user_id, friend_id, "friendship removed");
        Ok(())
    }

    /// Resolves a friend email to a user ID, failing without mutation
    /// when no user matches.
    async fn resolve_friend_id(&self, friend_email: &str) -> Result<i64, TrackerError> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = $1")
            .bind(friend_email)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?
            .ok_or_else(|| TrackerError::FriendNotFound(friend_email.to_string()))
    }
}
