//! Integer `{id}` path parameter.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Path id parsed as `i32`, anything else is a 400 naming the raw value.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_id(&raw).map(PathId)
    }
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::bad_request(format!("Invalid ID: {} is not integer", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_non_integer_names_raw_value() {
        let err = parse_id("abc").unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref m) if m == "Invalid ID: abc is not integer"));
    }
}
