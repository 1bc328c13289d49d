//! Data Transfer Objects for REST request/response serialization.
//!
//! Requests are validated here to the same range rules the original
//! form layer enforced before the store is ever called.

pub mod friend_dto;
pub mod goal_dto;
pub mod insight_dto;
pub mod user_dto;
pub mod workout_dto;

pub use friend_dto::*;
pub use goal_dto::*;
pub use insight_dto::*;
pub use user_dto::*;
pub use workout_dto::*;
