//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, health_handler, product_type_handler};
use crate::api::middleware::MetricsSnapshot;
use crate::domain::{
    LoginRequest, ProductType, ProductTypeCreate, ProductTypeUpdate, RefreshTokenRequest,
    UserCreate, UserDto, UserPassport, UserToken,
};
use crate::errors::FieldError;
use crate::types::{
    CountResponse, PassportResponse, ProductTypeResponse, ProductTypesResponse, StringResponse,
    ValidationResponse,
};

/// OpenAPI documentation for the ProductType API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ProductType API",
        version = "0.1.0",
        description = "ProductType CRUD with JWT access/refresh sessions"
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    paths(
        // Health endpoints
        health_handler::healthcheck,
        health_handler::livez,
        health_handler::readyz,
        health_handler::metrics,
        // ProductType endpoints
        product_type_handler::create_product_type,
        product_type_handler::list_product_types,
        product_type_handler::count_product_types,
        product_type_handler::get_product_type,
        product_type_handler::update_product_type,
        product_type_handler::delete_product_type,
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::refresh,
        auth_handler::logout,
    ),
    components(
        schemas(
            // Domain types
            ProductType,
            ProductTypeCreate,
            ProductTypeUpdate,
            UserCreate,
            LoginRequest,
            RefreshTokenRequest,
            UserDto,
            UserToken,
            UserPassport,
            FieldError,
            MetricsSnapshot,
            // Envelopes
            StringResponse,
            CountResponse,
            ProductTypeResponse,
            ProductTypesResponse,
            PassportResponse,
            ValidationResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness, readiness and metrics"),
        (name = "ProductType", description = "ProductType management operations"),
        (name = "Authentication", description = "Registration, login and token sessions")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token obtained from /auths/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/producttype/{id}"));
        assert!(doc.paths.paths.contains_key("/auths/reflesh"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
