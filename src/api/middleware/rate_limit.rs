//! Rate limiting middleware backed by the in-process limiter.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::AppState;
use crate::config::MSG_TOO_MANY_REQUESTS;
use crate::types::WebResponse;

/// Rate limit error response
#[derive(Debug)]
pub struct RateLimitError {
    pub limit: u64,
    pub retry_after: u64,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let mut response =
            WebResponse::text(StatusCode::TOO_MANY_REQUESTS, MSG_TOO_MANY_REQUESTS).into_response();

        let headers = response.headers_mut();
        headers.insert("Retry-After", HeaderValue::from(self.retry_after));
        headers.insert("X-RateLimit-Limit", HeaderValue::from(self.limit));
        headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("0"));

        response
    }
}

/// Extract client identifier for rate limiting.
/// Uses X-Forwarded-For header if behind proxy, otherwise uses connection IP.
pub fn get_client_identifier(request: &Request) -> String {
    // First IP in the chain is the original client
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
    {
        return forwarded.to_string();
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
    {
        return real_ip.trim().to_string();
    }

    if let Some(connect_info) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return connect_info.0.ip().to_string();
    }

    "unknown".to_string()
}

/// Sliding-window rate limiting middleware.
/// Limits each client to `rate_limit_max` requests per `rate_limit_window_seconds`.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    let client_id = get_client_identifier(&request);
    let limit = state.http.rate_limit_max;

    let decision =
        state
            .limiter
            .check_rate_limit(&client_id, limit, state.http.rate_limit_window_seconds);

    if !decision.allowed {
        tracing::warn!(
            client = %client_id,
            count = decision.count,
            "Rate limit exceeded"
        );
        return Err(RateLimitError {
            limit,
            retry_after: decision.retry_after,
        });
    }

    let mut response = next.run(request).await;

    let remaining = limit.saturating_sub(decision.count);
    response
        .headers_mut()
        .insert("X-RateLimit-Limit", HeaderValue::from(limit));
    response
        .headers_mut()
        .insert("X-RateLimit-Remaining", HeaderValue::from(remaining));

    Ok(response)
}
