//! Tracker error types with HTTP status code mapping.
//!
//! [`TrackerError`] is the central error type for the service. Every
//! store-level failure is caught at the persistence boundary and
//! converted into one of these variants; each variant maps to a
//! specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2101,
///     "message": "a user with email alice@example.com already exists",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category            | HTTP Status                |
/// |-----------|---------------------|----------------------------|
/// | 1000–1999 | Validation          | 400 Bad Request            |
/// | 2000–2099 | Not Found           | 404 Not Found              |
/// | 2100–2199 | Integrity Violation | 409 Conflict               |
/// | 3000–3999 | Store               | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Leaderboard metric is not supported.
    #[error("unsupported leaderboard metric: {0}")]
    UnsupportedMetric(String),

    /// User with the given ID was not found.
    #[error("user not found: {0}")]
    UserNotFound(i64),

    /// No user resolves to the given friend email.
    #[error("no user found with email {0}")]
    FriendNotFound(String),

    /// Goal with the given ID was not found.
    #[error("goal not found: {0}")]
    GoalNotFound(i64),

    /// A user with this email already exists.
    #[error("a user with email {0} already exists")]
    EmailExists(String),

    /// The friendship edge already exists.
    #[error("friendship already exists")]
    FriendshipExists,

    /// Store-level failure (connection, constraint, transient error).
    #[error("database error: {0}")]
    Database(String),
}

impl TrackerError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::UnsupportedMetric(_) => 1002,
            Self::UserNotFound(_) => 2001,
            Self::FriendNotFound(_) => 2002,
            Self::GoalNotFound(_) => 2003,
            Self::EmailExists(_) => 2101,
            Self::FriendshipExists => 2102,
            Self::Database(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::UnsupportedMetric(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) | Self::FriendNotFound(_) | Self::GoalNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::EmailExists(_) | Self::FriendshipExists => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            TrackerError::UserNotFound(7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TrackerError::FriendNotFound("x@y.com".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TrackerError::GoalNotFound(3).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn integrity_violations_map_to_409() {
        assert_eq!(
            TrackerError::EmailExists("a@b.com".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            TrackerError::FriendshipExists.status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(
            TrackerError::InvalidRequest(String::new()).error_code(),
            1001
        );
        assert_eq!(
            TrackerError::EmailExists("a@b.com".to_string()).error_code(),
            2101
        );
        assert_eq!(TrackerError::Database(String::new()).error_code(), 3001);
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = TrackerError::EmailExists("alice@example.com".to_string());
        assert!(err.to_string().contains("alice@example.com"));
        let err = TrackerError::UserNotFound(42);
        assert!(err.to_string().contains("42"));
    }
}
