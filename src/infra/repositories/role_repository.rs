//! Role repository implementation (read-only).

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::role::Entity as RoleEntity;
use crate::domain::Role;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Role>;
}

/// SeaORM-backed role repository
pub struct RoleStore {
    db: Arc<DatabaseConnection>,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Role> {
        RoleEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(Role::from)
            .ok_or_else(|| AppError::not_found(format!("Role with ID {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::entities::role;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![role::Model {
                id: 1,
                title: "Manager".into(),
            }]])
            .into_connection();
        let store = RoleStore::new(Arc::new(db));

        let role = store.find_by_id(1).await.unwrap();

        assert!(role.is_authorized());
    }

    #[tokio::test]
    async fn test_missing_role_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<role::Model>::new()])
            .into_connection();
        let store = RoleStore::new(Arc::new(db));

        assert!(matches!(store.find_by_id(9).await, Err(AppError::NotFound(_))));
    }
}
