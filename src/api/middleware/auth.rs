//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserClaims;
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i32,
    pub role_id: i32,
}

impl From<UserClaims> for CurrentUser {
    fn from(claims: UserClaims) -> Self {
        Self {
            user_id: claims.user_id,
            role_id: claims.role_id,
        }
    }
}

/// JWT authentication middleware.
///
/// Strips the `Bearer ` prefix, lets the auth service check the token against
/// its stored session and role, then injects the CurrentUser into the
/// request extensions. A missing header is parsed as an empty token and so
/// fails as a malformed one.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .unwrap_or(auth_header)
        .to_string();

    let claims = state.auth_service.authorize(&token).await.map_err(|e| {
        tracing::warn!(error = %e, "Request rejected by JWT gate");
        e
    })?;

    request.extensions_mut().insert(CurrentUser::from(claims));

    Ok(next.run(request).await)
}
