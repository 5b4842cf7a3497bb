//! Service Container - Centralized service access.
//!
//! Wires the SeaORM stores into the service implementations so handlers
//! only ever see the service traits.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::token::TokenManager;
use super::{AuthService, Authenticator, ProductTypeManager, ProductTypeService};
use crate::config::Config;
use crate::infra::{OauthStore, ProductTypeStore, RoleStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn product_types(&self) -> Arc<dyn ProductTypeService>;

    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    product_type_service: Arc<dyn ProductTypeService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: Arc<DatabaseConnection>, config: &Config) -> Self {
        let product_types = Arc::new(ProductTypeStore::new(db.clone()));
        let users = Arc::new(UserStore::new(db.clone()));
        let roles = Arc::new(RoleStore::new(db.clone()));
        let sessions = Arc::new(OauthStore::new(db));

        let tokens = TokenManager::new(config.token_settings());

        Self {
            product_type_service: Arc::new(ProductTypeManager::new(product_types)),
            auth_service: Arc::new(Authenticator::new(users, roles, sessions, tokens)),
        }
    }
}

impl ServiceContainer for Services {
    fn product_types(&self) -> Arc<dyn ProductTypeService> {
        self.product_type_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}

