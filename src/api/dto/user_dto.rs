//! User profile and login DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TrackerError;

/// Request body for `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserProfileRequest {
    /// Full display name.
    pub name: String,
    /// Email address; must be unique across all users.
    pub email: String,
    /// Body weight in kilograms.
    pub weight_kg: f64,
}

impl UserProfileRequest {
    /// Applies the form-layer range rules: non-empty name and email,
    /// positive weight.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidRequest`] naming the failing field.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::InvalidRequest(
                "name must not be empty".to_string(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(TrackerError::InvalidRequest(
                "email must not be empty".to_string(),
            ));
        }
        if self.weight_kg <= 0.0 {
            return Err(TrackerError::InvalidRequest(
                "weight_kg must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response body for `POST /users` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    /// Generated user ID.
    pub id: i64,
}

/// Request body for `POST /login`: profile lookup by email.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address to look up.
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, weight_kg: f64) -> UserProfileRequest {
        UserProfileRequest {
            name: name.to_string(),
            email: email.to_string(),
            weight_kg,
        }
    }

    #[test]
    fn valid_profile_passes() {
        assert!(request("Alice", "alice@example.com", 62.5).validate().is_ok());
    }

    #[test]
    fn blank_fields_and_non_positive_weight_fail() {
        assert!(request("  ", "alice@example.com", 62.5).validate().is_err());
        assert!(request("Alice", "", 62.5).validate().is_err());
        assert!(request("Alice", "alice@example.com", 0.0).validate().is_err());
    }
}
