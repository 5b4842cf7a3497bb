//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod oauth_repository;
mod product_type_repository;
mod role_repository;
mod user_repository;

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

pub use oauth_repository::{OauthRepository, OauthStore};
pub use product_type_repository::{ProductTypeRepository, ProductTypeStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use oauth_repository::MockOauthRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_type_repository::MockProductTypeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Unique-key violations on insert become `Conflict`, everything else stays a database error.
pub(crate) fn map_insert_error(err: DbErr, conflict_message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!("Unique constraint violated: {}", detail);
            AppError::conflict(conflict_message)
        }
        _ => AppError::from(err),
    }
}
