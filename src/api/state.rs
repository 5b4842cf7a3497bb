//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use super::middleware::Metrics;
use crate::config::{Config, HttpSettings};
use crate::infra::{Database, RateLimiter};
use crate::services::{AuthService, ProductTypeService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// ProductType CRUD service
    pub product_type_service: Arc<dyn ProductTypeService>,
    /// Registration, login and session service
    pub auth_service: Arc<dyn AuthService>,
    /// Database handle for readiness checks, absent when services are injected
    pub database: Option<Arc<Database>>,
    pub limiter: Arc<RateLimiter>,
    pub metrics: Arc<Metrics>,
    pub http: HttpSettings,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            product_type_service: container.product_types(),
            auth_service: container.auth(),
            database: Some(database),
            limiter: Arc::new(RateLimiter::new()),
            metrics: Arc::new(Metrics::new()),
            http: config.http_settings(),
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        product_type_service: Arc<dyn ProductTypeService>,
        auth_service: Arc<dyn AuthService>,
        http: HttpSettings,
    ) -> Self {
        Self {
            product_type_service,
            auth_service,
            database: None,
            limiter: Arc::new(RateLimiter::new()),
            metrics: Arc::new(Metrics::new()),
            http,
        }
    }

    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}
