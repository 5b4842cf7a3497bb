//! Application route configuration.

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_routes, health_routes, product_type_routes};
use super::middleware::{auth_middleware, metrics_middleware, rate_limit_middleware};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{HttpSettings, MSG_INTERNAL_SERVER_ERROR};
use crate::types::WebResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let mut product_types = product_type_routes();
    if state.http.auth_required {
        product_types = product_types.route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));
    }

    Router::new()
        .merge(health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(product_types)
        .merge(auth_routes())
        // Global middleware, outermost last
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&state.http))
        .with_state(state)
}

fn cors_layer(http: &HttpSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::HEAD,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]);

    // Credentials cannot be combined with a wildcard origin.
    if http.cors_allow_origins.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS allows any origin, credentials disabled");
        return layer.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = http
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    WebResponse::text(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_SERVER_ERROR)
        .into_response()
}
