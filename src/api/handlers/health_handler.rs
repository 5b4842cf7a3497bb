//! Health check and metrics handlers.

use axum::{extract::State, http::StatusCode, routing::get, Router};

use crate::api::middleware::MetricsSnapshot;
use crate::api::AppState;
use crate::config::MSG_WELCOME;
use crate::types::WebResponse;

/// Create health and metrics routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "Health",
    responses((status = 200, description = "Server is up", body = StringResponse))
)]
pub async fn healthcheck() -> WebResponse<String> {
    WebResponse::text(StatusCode::OK, MSG_WELCOME)
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/livez",
    tag = "Health",
    responses((status = 200, description = "Process is alive", body = StringResponse))
)]
pub async fn livez() -> WebResponse<String> {
    WebResponse::text(StatusCode::OK, "OK")
}

/// Readiness probe, pings the database
#[utoipa::path(
    get,
    path = "/readyz",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = StringResponse),
        (status = 503, description = "Database unreachable", body = StringResponse)
    )
)]
pub async fn readyz(State(state): State<AppState>) -> WebResponse<String> {
    let Some(database) = state.database.as_ref() else {
        return WebResponse::text(StatusCode::SERVICE_UNAVAILABLE, "Database not configured");
    };

    match database.ping().await {
        Ok(()) => WebResponse::text(StatusCode::OK, "OK"),
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            WebResponse::text(StatusCode::SERVICE_UNAVAILABLE, "Database unreachable")
        }
    }
}

/// Request counters and uptime
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses((status = 200, description = "Current counters", body = MetricsSnapshot))
)]
pub async fn metrics(State(state): State<AppState>) -> WebResponse<MetricsSnapshot> {
    WebResponse::ok(state.metrics.snapshot(state.limiter.tracked_clients()))
}
