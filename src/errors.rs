//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into the `{code, message}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::MSG_INTERNAL_SERVER_ERROR;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// `<Struct>.<Field>` namespace of the failing field
    #[schema(example = "ProductTypeCreate.ID")]
    pub failed_field: String,
    /// Rule that failed
    #[schema(example = "required")]
    pub tag: String,
    /// Rule parameter, empty when the rule takes none
    #[schema(example = "")]
    pub value: String,
}

impl FieldError {
    pub fn new(
        failed_field: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            failed_field: failed_field.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Plain error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// Validation error body, the message carries the failed rules
#[derive(Debug, Serialize)]
struct ValidationErrorBody {
    code: u16,
    message: Vec<FieldError>,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides driver details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_SERVER_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                msg.clone()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation(errors) => {
                let body = ValidationErrorBody {
                    code: status.as_u16(),
                    message: errors,
                };
                (status, Json(body)).into_response()
            }
            other => {
                let body = ErrorBody {
                    code: status.as_u16(),
                    message: other.user_message(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AppError::BadRequest("Token format is invalid".to_string()),
            ErrorKind::ExpiredSignature => AppError::Unauthorized("Token had expired".to_string()),
            _ => AppError::Unauthorized(format!("Parse token failed: {}", e)),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for the `NotFound` variant, used by find-then-write pre-checks.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_conflict_renders_code_and_message() {
        let (status, body) =
            body_json(AppError::conflict("ProductType with this ID already exists")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({"code": 409, "message": "ProductType with this ID already exists"})
        );
    }

    #[tokio::test]
    async fn test_database_error_hides_driver_details() {
        let error = AppError::from(sea_orm::DbErr::Custom("connection reset".into()));
        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"code": 500, "message": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_validation_renders_field_list() {
        let error = AppError::Validation(vec![FieldError::new(
            "ProductTypeCreate.Name",
            "max",
            "40",
        )]);
        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "code": 400,
                "message": [{"failed_field": "ProductTypeCreate.Name", "tag": "max", "value": "40"}]
            })
        );
    }

    #[test]
    fn test_jwt_error_classification() {
        let malformed: AppError =
            jsonwebtoken::errors::Error::from(ErrorKind::InvalidToken).into();
        assert!(matches!(malformed, AppError::BadRequest(ref m) if m == "Token format is invalid"));

        let expired: AppError =
            jsonwebtoken::errors::Error::from(ErrorKind::ExpiredSignature).into();
        assert!(matches!(expired, AppError::Unauthorized(ref m) if m == "Token had expired"));

        let signature: AppError =
            jsonwebtoken::errors::Error::from(ErrorKind::InvalidSignature).into();
        assert!(
            matches!(signature, AppError::Unauthorized(ref m) if m.starts_with("Parse token failed: "))
        );
    }
}
