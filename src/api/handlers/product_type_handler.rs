//! ProductType handlers.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathId};
use crate::api::AppState;
use crate::domain::{ProductType, ProductTypeCreate, ProductTypeUpdate};
use crate::errors::AppResult;
use crate::types::WebResponse;

/// Create product type routes, collection paths with and without the trailing slash
pub fn product_type_routes() -> Router<AppState> {
    Router::new()
        .route("/producttype", post(create_product_type).get(list_product_types))
        .route("/producttype/", post(create_product_type).get(list_product_types))
        .route("/producttype/count", get(count_product_types))
        .route(
            "/producttype/:id",
            get(get_product_type)
                .put(update_product_type)
                .delete(delete_product_type),
        )
}

/// Create a product type
#[utoipa::path(
    post,
    path = "/producttype/",
    tag = "ProductType",
    request_body = ProductTypeCreate,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Create ProductType Successfully", body = StringResponse),
        (status = 400, description = "Malformed body or failed field rules", body = ValidationResponse),
        (status = 409, description = "ProductType with this ID already exists", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn create_product_type(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProductTypeCreate>,
) -> AppResult<WebResponse<String>> {
    state.product_type_service.create(payload).await?;

    Ok(WebResponse::text(
        StatusCode::CREATED,
        "Create ProductType Successfully",
    ))
}

/// List all product types
#[utoipa::path(
    get,
    path = "/producttype/",
    tag = "ProductType",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All product types ordered by id", body = ProductTypesResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn list_product_types(
    State(state): State<AppState>,
) -> AppResult<WebResponse<Vec<ProductType>>> {
    let product_types = state.product_type_service.find_all().await?;
    Ok(WebResponse::ok(product_types))
}

/// Count product types
#[utoipa::path(
    get,
    path = "/producttype/count",
    tag = "ProductType",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Number of product types", body = CountResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn count_product_types(State(state): State<AppState>) -> AppResult<WebResponse<u64>> {
    let count = state.product_type_service.count().await?;
    Ok(WebResponse::ok(count))
}

/// Get a product type by id
#[utoipa::path(
    get,
    path = "/producttype/{id}",
    tag = "ProductType",
    params(("id" = i32, Path, description = "ProductType ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product type", body = ProductTypeResponse),
        (status = 400, description = "Invalid ID", body = StringResponse),
        (status = 404, description = "ProductType not found", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn get_product_type(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<WebResponse<ProductType>> {
    let product_type = state.product_type_service.find_by_id(id).await?;
    Ok(WebResponse::ok(product_type))
}

/// Rename a product type
#[utoipa::path(
    put,
    path = "/producttype/{id}",
    tag = "ProductType",
    params(("id" = i32, Path, description = "ProductType ID")),
    request_body = ProductTypeUpdate,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Update ProductType Successfully", body = StringResponse),
        (status = 400, description = "Invalid ID, malformed body or failed field rules", body = ValidationResponse),
        (status = 404, description = "ProductType not found", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn update_product_type(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<ProductTypeUpdate>,
) -> AppResult<WebResponse<String>> {
    state.product_type_service.update(id, payload).await?;

    Ok(WebResponse::text(
        StatusCode::OK,
        "Update ProductType Successfully",
    ))
}

/// Delete a product type
#[utoipa::path(
    delete,
    path = "/producttype/{id}",
    tag = "ProductType",
    params(("id" = i32, Path, description = "ProductType ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Delete ProductType Successfully", body = StringResponse),
        (status = 400, description = "Invalid ID", body = StringResponse),
        (status = 404, description = "ProductType not found", body = StringResponse),
        (status = 500, description = "Unexpected error", body = StringResponse)
    )
)]
pub async fn delete_product_type(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<WebResponse<String>> {
    state.product_type_service.delete(id).await?;

    Ok(WebResponse::text(
        StatusCode::OK,
        "Delete ProductType Successfully",
    ))
}
