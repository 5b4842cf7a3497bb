//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - The in-process request rate limiter

pub mod db;
pub mod rate_limiter;
pub mod repositories;

pub use db::{Database, Migrator};
pub use rate_limiter::{RateLimitDecision, RateLimiter};
pub use repositories::{
    OauthRepository, OauthStore, ProductTypeRepository, ProductTypeStore, RoleRepository,
    RoleStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockOauthRepository, MockProductTypeRepository, MockRoleRepository, MockUserRepository,
};
