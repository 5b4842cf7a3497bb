//! Authentication handlers.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathId};
use crate::api::AppState;
use crate::domain::{LoginRequest, RefreshTokenRequest, UserCreate, UserPassport};
use crate::errors::AppResult;
use crate::types::WebResponse;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auths", post(register))
        .route("/auths/", post(register))
        .route("/auths/login", post(login))
        .route("/auths/reflesh", post(refresh))
        .route("/auths/refresh", post(refresh))
        .route("/auths/logout/:id", delete(logout))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auths/",
    tag = "Authentication",
    request_body = UserCreate,
    responses(
        (status = 201, description = "Register User Successfully", body = StringResponse),
        (status = 400, description = "Malformed body or failed field rules", body = ValidationResponse),
        (status = 404, description = "Role not found", body = StringResponse),
        (status = 409, description = "User already exists", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserCreate>,
) -> AppResult<WebResponse<String>> {
    state.auth_service.register(payload).await?;

    Ok(WebResponse::text(
        StatusCode::CREATED,
        "Register User Successfully",
    ))
}

/// Login and open a token session
#[utoipa::path(
    post,
    path = "/auths/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = PassportResponse),
        (status = 400, description = "Malformed body or failed field rules", body = ValidationResponse),
        (status = 401, description = "Email or Password is incorrect", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> AppResult<WebResponse<UserPassport>> {
    let passport = state.auth_service.login(payload).await?;
    Ok(WebResponse::ok(passport))
}

/// Rotate the token pair of a session
#[utoipa::path(
    post,
    path = "/auths/reflesh",
    tag = "Authentication",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens rotated", body = PassportResponse),
        (status = 400, description = "Malformed body or token", body = StringResponse),
        (status = 401, description = "Refresh token expired, invalid or revoked", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RefreshTokenRequest>,
) -> AppResult<WebResponse<UserPassport>> {
    let passport = state.auth_service.refresh_passport(payload).await?;
    Ok(WebResponse::ok(passport))
}

/// Close a session by oauth id
#[utoipa::path(
    delete,
    path = "/auths/logout/{id}",
    tag = "Authentication",
    params(("id" = i32, Path, description = "Oauth session ID")),
    responses(
        (status = 200, description = "Logout User Successfully", body = StringResponse),
        (status = 400, description = "Invalid ID", body = StringResponse),
        (status = 404, description = "Session not found", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    PathId(oauth_id): PathId,
) -> AppResult<WebResponse<String>> {
    state.auth_service.logout(oauth_id).await?;

    Ok(WebResponse::text(StatusCode::OK, "Logout User Successfully"))
}
