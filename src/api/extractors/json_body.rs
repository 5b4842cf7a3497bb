//! JSON body extractor - Deserialization failures become `{code, message}` 400s.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection renders through `AppError`.
///
/// Field rules are checked by the services, so this only parses. DTOs use
/// `#[serde(default)]` so a missing field reaches validation as a zero value.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(error = %e.body_text(), "Request body rejected");
            AppError::bad_request(e.body_text())
        })?;

        Ok(JsonBody(value))
    }
}
