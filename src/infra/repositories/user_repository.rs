//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::map_insert_error;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user whose password is already hashed
    async fn create(&self, user: User) -> AppResult<()>;

    async fn find_by_id(&self, id: i32) -> AppResult<User>;

    async fn find_by_email(&self, email: &str) -> AppResult<User>;
}

/// SeaORM-backed user repository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(user.id),
            role_id: Set(user.role_id),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
        };

        active_model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| map_insert_error(e, "User with this ID or email already exists"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::not_found(format!("User with ID {} not found", id)))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?
            .map(User::from)
            .ok_or_else(|| AppError::not_found("User with this email not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row() -> user::Model {
        user::Model {
            id: 1,
            role_id: 1,
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password_hash: "$argon2id$hash".into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row()]])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        let user = store.find_by_email("jane@example.com").await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.password_hash, "$argon2id$hash");
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let store = UserStore::new(Arc::new(db));

        assert!(matches!(store.find_by_id(2).await, Err(AppError::NotFound(_))));
    }
}
