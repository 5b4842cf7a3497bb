//! HTTP request handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod product_type_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use product_type_handler::product_type_routes;
