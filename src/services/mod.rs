//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, never on
//! SeaORM directly.

mod auth_service;
pub mod container;
mod product_type_service;
pub mod token;
pub mod validation;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use product_type_service::{ProductTypeManager, ProductTypeService};
pub use token::{TokenClaims, TokenManager, TokenPair};
