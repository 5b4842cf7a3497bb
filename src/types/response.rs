use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ProductType, UserPassport};
use crate::errors::FieldError;

/// `{code, message}` envelope returned by every endpoint.
///
/// `code` mirrors the HTTP status, `message` carries either a text or the
/// payload of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    StringResponse = WebResponse<String>,
    CountResponse = WebResponse<u64>,
    ProductTypeResponse = WebResponse<ProductType>,
    ProductTypesResponse = WebResponse<Vec<ProductType>>,
    PassportResponse = WebResponse<UserPassport>,
    ValidationResponse = WebResponse<Vec<FieldError>>
)]
pub struct WebResponse<T> {
    #[schema(example = 200)]
    pub code: u16,
    pub message: T,
}

impl<T: Serialize> WebResponse<T> {
    pub fn new(status: StatusCode, message: T) -> Self {
        Self {
            code: status.as_u16(),
            message,
        }
    }

    pub fn ok(message: T) -> Self {
        Self::new(StatusCode::OK, message)
    }
}

impl WebResponse<String> {
    /// Text-only response
    pub fn text(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, message.into())
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_status_follows_code() {
        let response = WebResponse::text(StatusCode::CREATED, "Create ProductType Successfully")
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"code":201,"message":"Create ProductType Successfully"}"#
        );
    }

    #[test]
    fn test_payload_is_nested_under_message() {
        let body = serde_json::to_value(WebResponse::ok(3_u64)).unwrap();

        assert_eq!(body, serde_json::json!({"code": 200, "message": 3}));
    }
}
