//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::rules::{required_positive, required_text};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub role_id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Registration request.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UserCreate {
    #[serde(rename = "user_id")]
    #[validate(custom(function = "required_positive"))]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(custom(function = "required_positive"))]
    #[schema(example = 1)]
    pub role_id: i32,
    #[serde(rename = "user_name")]
    #[validate(custom(function = "required_text"), length(max = 40, code = "max"))]
    #[schema(example = "Jane Doe", max_length = 40)]
    pub name: String,
    #[serde(rename = "user_email")]
    #[validate(
        custom(function = "required_text"),
        email(code = "email"),
        length(max = 50, code = "max")
    )]
    #[schema(example = "jane@example.com", max_length = 50)]
    pub email: String,
    #[serde(rename = "user_password")]
    #[validate(custom(function = "required_text"), length(max = 255, code = "max"))]
    #[schema(example = "secret", max_length = 255)]
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "user_email")]
    #[validate(
        custom(function = "required_text"),
        email(code = "email"),
        length(max = 40, code = "max")
    )]
    #[schema(example = "jane@example.com", max_length = 40)]
    pub email: String,
    #[serde(rename = "user_password")]
    #[validate(custom(function = "required_text"), length(max = 255, code = "max"))]
    #[schema(example = "secret", max_length = 255)]
    pub password: String,
}

/// User as returned to clients, without the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[serde(rename = "user_id")]
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub role_id: i32,
    #[serde(rename = "user_name")]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(rename = "user_email")]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            role_id: user.role_id,
            name: user.name,
            email: user.email,
        }
    }
}
