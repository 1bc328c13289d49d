//! Friendship DTOs.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Request body for `POST /users/{id}/friends`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddFriendRequest {
    /// Email of the user to add; must resolve to an existing profile.
    pub email: String,
}

/// Query parameters for `DELETE /users/{id}/friends`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FriendQuery {
    /// Email of the friend to remove.
    pub email: String,
}
